mod raw_pma;
mod thresholds;

pub(crate) use raw_pma::RawPma;
