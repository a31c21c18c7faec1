pub mod profile;
pub mod recommendation;
pub mod result;
pub mod skill;
