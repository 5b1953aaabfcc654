pub mod hyperbolic_graph;
