//! # fieldscope-form: binding typed forms to introspectable schemas
//!
//! A [`FormContext`] holds the schema and the active discriminated-union
//! member; field components ask it for a [`FieldDescriptor`] (label,
//! description, required marker, checks, default). A [`Form`] owns the
//! values being edited, starting from the schema defaults, and turns them
//! into the validated type on [`submit`](Form::submit).
//!
//! ```rust
//! use fieldscope::schema::{self as z, prelude::*};
//! use fieldscope::{paths, Editable, FieldPaths};
//! use fieldscope_form::{Form, FormContext};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Serialize, Deserialize, Editable, FieldPaths)]
//! struct Signup {
//!     email: String,
//!     newsletter: bool,
//! }
//!
//! let schema = z::object()
//!     .field("email", z::string().email().describe("Work email"))
//!     .field("newsletter", z::boolean().with_default(false));
//!
//! let mut form = Form::new(FormContext::<Signup>::new(schema));
//! let email = paths::<Signup>().email();
//!
//! let binding = form.text(&email);
//! assert!(binding.descriptor.required);
//! assert_eq!(binding.descriptor.label, "Work email");
//!
//! form.set(&email, "ada@example.com".to_string()).unwrap();
//! let signup = form.submit().unwrap();
//! assert!(!signup.newsletter);
//! ```

mod cache;
mod context;
mod descriptor;
pub mod error;
mod form;
pub mod label;

pub use cache::IntrospectionCache;
pub use context::FormContext;
pub use descriptor::{is_discriminator_field, FieldDescriptor};
pub use error::FormError;
pub use form::{FieldBinding, Form};
pub use label::{humanize, label_key, LabelLookup, NoLabels};
