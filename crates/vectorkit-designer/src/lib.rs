//! # VectorKit Designer
//!
//! The selection-driven property customisation engine of the VectorKit
//! drawing editor.
//!
//! ## Core Components
//!
//! - **Model**: Lines, plots, arcs, grids, rectangles, dots and text with
//!   validated geometry and cached derived values
//! - **Shape Store**: Owns drawing objects, keyed by stable [`ShapeId`]
//! - **Selection**: Ordered selected ids with an observer contract
//! - **Customisers**: Per-capability activation state machines
//! - **Dispatcher**: All-or-nothing property edits over the selection
//! - **History**: Undo/redo of applied edits
//!
//! ## Architecture
//!
//! ```text
//! Editor
//!   ├── ShapeStore (DrawingObject → Shape)
//!   ├── Selection ──notifies──▶ CustomiserPanel (one Customiser per Capability)
//!   ├── PropertyDispatcher (edit → ChangeProperties)
//!   └── History (undo/redo)
//!
//! EventBus ◀── selection, document, customiser and property events
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use vectorkit_designer::{Editor, PropertyEdit};
//! use vectorkit_designer::model::{DesignPlot, PlotParams, PlotStyle, Point};
//!
//! let mut editor = Editor::new();
//! let plot = DesignPlot::new(Point::ORIGIN, &PlotParams::default())?;
//! let id = editor.add_shape(plot);
//! editor.select(id);
//! editor.apply(PropertyEdit::plot_style(PlotStyle::Polygon))?;
//! ```

pub mod commands;
pub mod customiser;
pub mod dispatcher;
pub mod drawing_object;
pub mod editor;
pub mod model;
pub mod selection;
pub mod shape_store;

pub use commands::{ChangeProperties, History};
pub use customiser::{ActivationState, Customiser, CustomiserPanel, DisplayedProperty, Transition};
pub use dispatcher::{DispatchOutcome, EligibilityPolicy, PropertyDispatcher};
pub use drawing_object::DrawingObject;
pub use editor::{Editor, EditorOptions};
pub use model::{
    Capability, DesignerShape, Point, PropertyEdit, PropertyKey, PropertyValue, Shape, ShapeType,
};
pub use selection::{Selection, SelectionObserver};
pub use shape_store::ShapeStore;

pub use vectorkit_core::ShapeId;
