pub mod activities;
pub mod campers;
pub mod signups;
