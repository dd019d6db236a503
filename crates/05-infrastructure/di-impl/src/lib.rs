//! # 依赖注入具体实现
//!
//! 提供基于包扫描的应用上下文、组件目录扫描器和上下文配置。
//!
//! ```rust,no_run
//! use di_abstractions::ApplicationContext;
//! use di_impl::AnnotationApplicationContext;
//!
//! let mut context = AnnotationApplicationContext::builder()
//!     .scan_package("my_app::beans")
//!     .build()?;
//! context.refresh()?;
//!
//! for name in context.bean_definition_names() {
//!     println!("{name}");
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod context;
pub mod processor;
pub mod scanner;

pub use config::ContextConfig;
pub use context::{AnnotationApplicationContext, ContextBuilder};
pub use processor::{ComponentScanProcessor, INTERNAL_COMPONENT_SCAN_PROCESSOR};
pub use scanner::CatalogComponentScanner;
