pub mod graphics_device;
