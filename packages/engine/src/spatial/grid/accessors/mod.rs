mod cell_ops;
mod type_color;
mod updated;
