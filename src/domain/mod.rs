pub mod entities;
pub mod phone_demo;
