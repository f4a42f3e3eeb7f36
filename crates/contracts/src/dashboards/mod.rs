pub mod d400_store_overview;
