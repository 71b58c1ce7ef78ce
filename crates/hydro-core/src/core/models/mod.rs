pub mod residue;
pub mod sequence;
