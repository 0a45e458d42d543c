pub mod outliers;
pub mod ranking;
pub mod segmentation;
pub mod summary;
