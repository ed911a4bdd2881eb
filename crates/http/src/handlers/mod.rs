pub mod flavors;
