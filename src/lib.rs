//! Wordle Arena
//!
//! Wordle with two engines behind one session trait: a plain game with a
//! fixed random answer, and an adaptive game that keeps every consistent
//! answer alive and always hands back the least helpful feedback. Both can be
//! played in the terminal or over HTTP.
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use wordle_arena::core::WordList;
//! use wordle_arena::game::{AdaptiveGame, Session};
//! use wordle_arena::wordlists::loader::words_from_slice;
//!
//! let words = Arc::new(WordList::new(words_from_slice(&["panic", "buggy", "manic"])));
//! let mut game = AdaptiveGame::new(6, words).unwrap();
//!
//! assert!(!game.guess("panic").unwrap());
//! assert!(game.guess("buggy").unwrap());
//! assert_eq!(game.answer().map(|w| w.text()), Some("buggy"));
//! ```

// Core domain types
pub mod core;

// Game sessions
pub mod game;

// Word lists
pub mod wordlists;

// Shared game configuration
pub mod config;

// Multiplayer rooms over the game engines
pub mod service;

// HTTP transport
pub mod server;

// HTTP client and duel
pub mod client;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
