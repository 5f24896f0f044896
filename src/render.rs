//! Dialect-aware rendering of syntax tree nodes back into SQL text.
//!
//! Rendering is a pure recursive composition: every node writes its own
//! template into a [`SqlWriter`] and asks its children to do the same. The
//! output buffer is only handed back when the whole tree rendered, so a
//! failure never leaks truncated text.

mod clause;
mod ddl;
mod element;
mod expression;
mod statement;

use alloc::string::String;
use core::fmt::{Display, Write};

use crate::catalog::Keyword;
use crate::dialect::{Dialect, RenderOptions};
use crate::errors::Error;

/// A node that can be rendered as SQL text.
pub trait Render {
    /// Writes the SQL text of this node into the writer.
    ///
    /// # Errors
    ///
    /// * `UnsupportedDialectFeature` - If the node, or one of its children, cannot be expressed in the writer's dialect.
    /// * `UnrecognizedDialect` - If a statement has no rendering for the writer's dialect.
    /// * `NestingTooDeep` - If the tree nests deeper than the writer's bound.
    fn render_into(&self, w: &mut SqlWriter<'_>) -> Result<(), Error>;

    /// Renders this node for the given dialect with default options.
    ///
    /// # Errors
    ///
    /// See [`Render::render_into`].
    fn render(&self, dialect: Dialect) -> Result<String, Error> {
        self.render_with(&RenderOptions::new(dialect))
    }

    /// Renders this node with explicit options.
    ///
    /// # Errors
    ///
    /// See [`Render::render_into`].
    fn render_with(&self, options: &RenderOptions) -> Result<String, Error> {
        log::trace!(
            "Rendering {} for the {} dialect",
            core::any::type_name::<Self>(),
            options.dialect
        );
        let mut writer = SqlWriter::new(options);
        self.render_into(&mut writer)?;
        Ok(writer.finish())
    }
}

/// Renders any node for the given dialect.
///
/// # Errors
///
/// See [`Render::render_into`].
///
/// # Example
///
/// ```
/// use metasequoia_ast::{Dialect, LimitClause, render};
///
/// let limit = LimitClause::new(10);
/// assert_eq!(render(&limit, Dialect::MySql).unwrap(), "LIMIT 0, 10");
/// ```
pub fn render<N: Render + ?Sized>(node: &N, dialect: Dialect) -> Result<String, Error> {
    node.render(dialect)
}

impl<N: Render + ?Sized> Render for &N {
    fn render_into(&self, w: &mut SqlWriter<'_>) -> Result<(), Error> {
        (**self).render_into(w)
    }
}

impl<N: Render + ?Sized> Render for alloc::boxed::Box<N> {
    fn render_into(&self, w: &mut SqlWriter<'_>) -> Result<(), Error> {
        (**self).render_into(w)
    }
}

/// Output buffer threaded through a render call.
#[derive(Debug)]
pub struct SqlWriter<'a> {
    buf: String,
    options: &'a RenderOptions,
    depth: usize,
}

impl<'a> SqlWriter<'a> {
    /// Creates an empty writer.
    #[must_use]
    pub fn new(options: &'a RenderOptions) -> Self {
        Self {
            buf: String::new(),
            options,
            depth: 0,
        }
    }

    /// The dialect being rendered.
    #[must_use]
    pub fn dialect(&self) -> Dialect {
        self.options.dialect
    }

    /// The options of this render call.
    #[must_use]
    pub fn options(&self) -> &RenderOptions {
        self.options
    }

    /// Consumes the writer and returns the rendered text.
    #[must_use]
    pub fn finish(self) -> String {
        self.buf
    }

    /// Appends raw text.
    pub fn push_str(&mut self, s: &str) {
        self.buf.push_str(s);
    }

    /// Appends a single character.
    pub fn push(&mut self, c: char) {
        self.buf.push(c);
    }

    /// Appends one indentation step of `options.indent` spaces.
    pub fn indent(&mut self) {
        for _ in 0..self.options.indent {
            self.buf.push(' ');
        }
    }

    /// Appends the `Display` form of a value.
    pub fn push_display(&mut self, value: impl Display) {
        // Writing into a String cannot fail.
        let _ = write!(self.buf, "{value}");
    }

    /// Appends a keyword, failing if the dialect cannot express it.
    ///
    /// # Errors
    ///
    /// * `UnsupportedDialectFeature` - If the keyword is not available in the dialect.
    pub fn keyword<K: Keyword>(&mut self, keyword: K) -> Result<(), Error> {
        if !keyword.is_supported_by(self.dialect()) {
            return Err(self.unsupported(keyword.keyword()));
        }
        self.buf.push_str(keyword.keyword());
        Ok(())
    }

    /// Renders a child node.
    ///
    /// # Errors
    ///
    /// Propagates the child's error.
    pub fn node<N: Render + ?Sized>(&mut self, node: &N) -> Result<(), Error> {
        node.render_into(self)
    }

    /// Renders a sequence of nodes joined by `separator`.
    ///
    /// # Errors
    ///
    /// Propagates the first child error.
    pub fn list<N: Render>(&mut self, items: &[N], separator: &str) -> Result<(), Error> {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.buf.push_str(separator);
            }
            item.render_into(self)?;
        }
        Ok(())
    }

    /// Renders a child node into a fresh string, at the current depth.
    ///
    /// # Errors
    ///
    /// Propagates the child's error.
    pub fn capture<N: Render + ?Sized>(&mut self, node: &N) -> Result<String, Error> {
        let saved = core::mem::take(&mut self.buf);
        let result = node.render_into(self);
        let captured = core::mem::replace(&mut self.buf, saved);
        result.map(|()| captured)
    }

    /// Runs `f` one nesting level deeper.
    ///
    /// # Errors
    ///
    /// * `NestingTooDeep` - If the new level exceeds the configured bound.
    pub fn nested<F>(&mut self, f: F) -> Result<(), Error>
    where
        F: FnOnce(&mut Self) -> Result<(), Error>,
    {
        if self.depth >= self.options.max_depth {
            log::debug!(
                "Refusing to render a tree nested deeper than {} levels",
                self.options.max_depth
            );
            return Err(Error::NestingTooDeep {
                limit: self.options.max_depth,
            });
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    /// Builds the error for a construct the current dialect cannot express.
    #[must_use]
    pub fn unsupported(&self, feature: &'static str) -> Error {
        log::debug!("{feature} rejected for the {} dialect", self.dialect());
        Error::UnsupportedDialectFeature {
            feature,
            dialect: self.dialect(),
        }
    }

    /// Builds the error for a statement with no rendering in the current dialect.
    #[must_use]
    pub fn unrecognized(&self, statement: &'static str) -> Error {
        log::debug!("{statement} has no rendering for the {} dialect", self.dialect());
        Error::UnrecognizedDialect {
            statement,
            dialect: self.dialect(),
        }
    }
}
