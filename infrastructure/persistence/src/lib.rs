pub mod storage {
    pub mod error;
    pub mod file;
    pub mod medium;
    pub mod memory;
}
pub mod cart {
    pub mod record;
    pub mod store;
}
pub mod catalog {
    pub mod record;
    pub mod repository;
}

#[cfg(test)]
pub(crate) mod test_support;
