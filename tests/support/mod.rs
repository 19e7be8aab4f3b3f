pub mod architecture;
