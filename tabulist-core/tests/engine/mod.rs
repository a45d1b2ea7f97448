mod detection;
mod escaping;
mod properties;
mod toggle;
