//! Drawing surfaces and the render slot that owns their live rendering

use std::path::PathBuf;

use thiserror::Error;

use crate::chart::{self, ChartFormat};
use crate::output::print_projection;
use crate::projection::{ChartKind, ChartProjection};

#[derive(Debug, Error)]
pub(crate) enum RenderError {
    #[error("drawing surface unavailable: {0}")]
    SurfaceUnavailable(String),
    #[error("unsupported chart format: {0} (expected png, svg or html)")]
    UnsupportedFormat(String),
    #[error("{0}")]
    Render(String),
}

/// One live rendering on a surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RenderHandle {
    pub(crate) id: u64,
    pub(crate) points: usize,
}

/// Something a chart can be drawn onto
pub(crate) trait ChartSurface {
    /// Short description for diagnostics
    fn name(&self) -> String;

    /// Draw a projection. The caller must release any previous handle first.
    fn draw(
        &mut self,
        projection: &ChartProjection,
        kind: ChartKind,
    ) -> Result<RenderHandle, RenderError>;

    /// Release a handle returned by `draw`
    fn release(&mut self, handle: RenderHandle);
}

/// Owns a surface and at most one live handle on it.
///
/// `render` always releases the previous handle before drawing, and dropping the
/// slot releases whatever is still live.
pub(crate) struct RenderSlot {
    surface: Box<dyn ChartSurface>,
    live: Option<RenderHandle>,
}

impl RenderSlot {
    pub(crate) fn new(surface: impl ChartSurface + 'static) -> Self {
        Self {
            surface: Box::new(surface),
            live: None,
        }
    }

    pub(crate) fn name(&self) -> String {
        self.surface.name()
    }

    pub(crate) fn live(&self) -> Option<RenderHandle> {
        self.live
    }

    pub(crate) fn render(
        &mut self,
        projection: &ChartProjection,
        kind: ChartKind,
    ) -> Result<RenderHandle, RenderError> {
        self.clear();
        let handle = self.surface.draw(projection, kind)?;
        self.live = Some(handle);
        Ok(handle)
    }

    pub(crate) fn clear(&mut self) {
        if let Some(handle) = self.live.take() {
            self.surface.release(handle);
        }
    }
}

impl Drop for RenderSlot {
    fn drop(&mut self) {
        self.clear();
    }
}

/// Chart image/document written to a file; each draw replaces the previous file
pub(crate) struct ImageSurface {
    path: PathBuf,
    draws: u64,
    live: Option<u64>,
}

impl ImageSurface {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            draws: 0,
            live: None,
        }
    }

    fn check_available(&self) -> Result<ChartFormat, RenderError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.is_dir()
        {
            return Err(RenderError::SurfaceUnavailable(format!(
                "directory does not exist: {}",
                parent.display()
            )));
        }

        ChartFormat::from_path(&self.path)
            .ok_or_else(|| RenderError::UnsupportedFormat(self.path.display().to_string()))
    }
}

impl ChartSurface for ImageSurface {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn draw(
        &mut self,
        projection: &ChartProjection,
        kind: ChartKind,
    ) -> Result<RenderHandle, RenderError> {
        debug_assert!(self.live.is_none(), "previous rendering was not released");

        let format = self.check_available()?;
        let chart = chart::build_chart(projection, kind);
        chart::save_chart(&chart, format, &projection.chart_title, &self.path)
            .map_err(RenderError::Render)?;

        self.draws += 1;
        self.live = Some(self.draws);
        Ok(RenderHandle {
            id: self.draws,
            points: projection.len(),
        })
    }

    fn release(&mut self, handle: RenderHandle) {
        if self.live == Some(handle.id) {
            self.live = None;
        }
    }
}

/// Projection printed as a table on stdout
#[derive(Default)]
pub(crate) struct TerminalSurface {
    draws: u64,
}

impl ChartSurface for TerminalSurface {
    fn name(&self) -> String {
        "terminal".to_string()
    }

    fn draw(
        &mut self,
        projection: &ChartProjection,
        kind: ChartKind,
    ) -> Result<RenderHandle, RenderError> {
        print_projection(projection, kind);
        self.draws += 1;
        Ok(RenderHandle {
            id: self.draws,
            points: projection.len(),
        })
    }

    // Printed output cannot be withdrawn
    fn release(&mut self, _handle: RenderHandle) {}
}
