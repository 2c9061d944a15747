pub mod about;
pub mod certificate;
pub mod education;
pub mod experience;
pub mod pages;
pub mod project;
pub mod skill;
