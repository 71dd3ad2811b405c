mod configuration;
mod error;
mod raster;
