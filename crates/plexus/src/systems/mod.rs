pub mod links;
#[cfg(feature = "vectors")]
pub mod vector;
