pub mod bugs;
