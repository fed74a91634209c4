pub mod demo_role;
pub mod waitlist_entry;
