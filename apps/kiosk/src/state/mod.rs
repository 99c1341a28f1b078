//! # State Module
//!
//! Application state for the kiosk.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 OrderStore<A: MenuApi>                          │   │
//! │  │                                                                 │   │
//! │  │  api: A ───────────── HttpMenuApi in production,               │   │
//! │  │                       in-memory fake in tests                   │   │
//! │  │                                                                 │   │
//! │  │  state: StoreState                                              │   │
//! │  │    categories │ products │ cart │ table_number                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                                                         │
//! │  OWNERSHIP:                                                            │
//! │  • One owner (the Kiosk); no global instance, no locks                 │
//! │  • Changes go through Mutation values applied by commit()              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod store;

pub use store::{CartTotals, Mutation, OrderStore, StoreState};
