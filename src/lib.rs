// Modules are exported so the simulation can be tested on the host
pub mod config;
pub mod components {
    pub mod clock;
    pub mod icons;
    pub mod journey;
    pub mod status_tile;
}
pub mod pages {
    pub mod landing;
}
