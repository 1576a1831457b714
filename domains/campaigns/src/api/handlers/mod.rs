pub mod applications;
pub mod campaigns;
