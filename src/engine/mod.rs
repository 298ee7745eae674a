//! Engine services around the search: background jobs, cancellation and
//! the calls a game front end uses.

mod cancel;
mod controller;
pub mod interface;

pub use cancel::CancelToken;
pub use controller::{find_best_move, AiReply, SearchController, SearchJob};
pub use interface::{apply_human_move, game_status, legal_moves_for_display, request_ai_move};
