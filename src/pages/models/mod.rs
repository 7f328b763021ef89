pub mod unload_guard;
