pub mod glow_device;
