pub mod cps;
pub mod emc;
pub mod emctext;
pub mod msc;
pub mod pak;
pub mod scene;
pub mod wsa;
