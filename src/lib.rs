//! Crate root module declarations for the Luna chess engine.
//!
//! Exposes the bitboard position, move generation, search, the engine facade
//! and the UCI loop so the binary, benches and tests share module paths.

pub mod errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod game_status;
}

pub mod moves {
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod sliding_moves;
    pub mod step_tables;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod move_generator;
    pub mod move_list;
    pub mod perft;
    pub mod pseudo_legal;
    pub mod pseudo_move_shared;
    pub mod pseudo_moves_king;
    pub mod pseudo_moves_knight;
    pub mod pseudo_moves_pawn;
    pub mod pseudo_moves_sliders;
}

pub mod search {
    pub mod board_scoring;
    pub mod minimax;
}

pub mod tables {
    pub mod opening_moves;
    pub mod piece_square_tables;
}

pub mod engines {
    pub mod engine_minimax;
    pub mod engine_trait;
    pub mod time_management;
}

pub mod uci {
    pub mod uci_top;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
}
