//! エディットメニューのアイテム絞り込み
//!
//! 検索語でアイテム一覧を絞り込むためのロジックと、その検索履歴。
//! ウィジェットの生成や描画はホスト側の仕事で、ここでは
//! `ItemProvider` と `ViewHooks` を通してだけやり取りする。

pub mod catalog;
pub mod compare;
pub mod config;
pub mod context;
pub mod env;
pub mod error;
pub mod fs;
pub mod gate;
pub mod history;
pub mod item;
pub mod kind;
pub mod matcher;
pub mod query;
pub mod session;
pub mod view;

pub use compare::{CultureComparer, TextComparer};
pub use config::{ConfigGateway, ConfigStore, FilterConfig, JsonConfigGateway};
pub use context::FilterContext;
pub use error::{FilterError, Result};
pub use item::{Item, ItemCollection, ItemProvider};
pub use kind::MenuKind;
pub use matcher::TokenMatcher;
pub use query::{FilterMode, FilterOptions, FilterQuery, OptionId};
pub use session::{FilterSession, FilterState};
pub use view::{NoopView, ViewHooks};
