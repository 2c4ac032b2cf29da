pub mod node_model;
