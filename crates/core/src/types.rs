/// Bug primary keys are server-generated UUID v4 strings (36 characters).
pub type BugId = String;
