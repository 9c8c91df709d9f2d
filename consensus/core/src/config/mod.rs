pub mod base58;
pub mod genesis;
pub mod params;
pub mod seeds;
pub mod selection;
