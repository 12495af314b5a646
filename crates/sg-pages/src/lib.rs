//! # sg-pages
//!
//! Page controllers, router, and root shell for the Skygate client.
//!
//! Three pages talk to the compliance API through
//! [`ComplianceApi`](sg_client::ComplianceApi):
//!
//! - [`AuditPage`]: request a website audit and show the reported issues.
//! - [`ConsentPage`]: submit a consent template, show any suggested revision.
//! - [`ChecklistPage`]: list the business's tasks and add new ones.
//!
//! The [`Shell`] resolves paths with [`Route`] and mounts one page at a time.
//! Every page renders to a [`View`] that the CLI prints as text or JSON.

pub mod error;
pub mod pages;
pub mod router;
pub mod sequence;
pub mod shell;
pub mod view;

mod test_support;

pub use error::FormError;
pub use pages::{AuditPage, ChecklistPage, ConsentPage};
pub use router::Route;
pub use sequence::{Failure, Phase, Ticket};
pub use shell::{ActivePage, Shell, ShellStatus};
pub use view::{Element, View, render_text};
