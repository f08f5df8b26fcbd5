pub mod soup_vis2d;
