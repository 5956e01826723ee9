use std::path::PathBuf;

use vectorkit::model::{DesignPlot, DesignRectangle, PlotStyle};
use vectorkit::{init_logging, open_editor, DispatchOutcome, PropertyEdit, PropertyKey};

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let (_, mut editor) = open_editor(config_path.as_deref())?;

    let mut plots = Vec::new();
    for _ in 0..2 {
        let plot = DesignPlot::new(vectorkit::Point::ORIGIN, editor.plot_defaults())?;
        plots.push(editor.add_shape(plot));
    }
    let rect = editor.add_shape(DesignRectangle::default());

    editor.select_only(&plots);
    tracing::info!("Active customisers: {:?}", editor.active_capabilities());

    let outcome = editor.apply(PropertyEdit::plot_style(PlotStyle::Polygon))?;
    tracing::info!("Plot style edit applied: {}", outcome.is_applied());

    editor.select(rect);
    tracing::info!("Active customisers: {:?}", editor.active_capabilities());
    if let DispatchOutcome::Ineligible = editor.apply(PropertyEdit::plot_style(PlotStyle::Dots))? {
        tracing::info!("Plot style edit ignored for a mixed selection");
    }

    editor.apply(PropertyEdit::number(PropertyKey::Thickness, 3.5))?;
    editor.undo()?;
    editor.redo()?;
    tracing::info!("{:?}", editor);

    Ok(())
}
