pub mod a002_tax;
