// ABOUTME: SVG implementation of the drawing canvas port
// ABOUTME: Builds an SVG document and exports it as a base64 data URI; raster formats are rejected
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLab Training

use crate::ports::{Canvas, CanvasFactory, Point, TextStyle, VideoFrame};
use base64::{engine::general_purpose, Engine as _};
use liftlab_core::errors::{AppError, AppResult};
use liftlab_intelligence::config::ImageFormat;

/// Background used when the video frame carries no pixels
const BLANK_BACKGROUND: &str = "#101418";

/// Canvas that records drawing operations as SVG elements
#[derive(Debug, Clone)]
pub struct SvgCanvas {
    width: u32,
    height: u32,
    elements: Vec<String>,
}

impl SvgCanvas {
    /// Create a blank canvas
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            elements: Vec::new(),
        }
    }

    /// Complete SVG document
    #[must_use]
    pub fn to_document(&self) -> String {
        let mut document = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.width,
            h = self.height
        );
        for element in &self.elements {
            document.push_str(element);
        }
        document.push_str("</svg>");
        document
    }
}

impl Canvas for SvgCanvas {
    fn draw_frame(&mut self, frame: &VideoFrame) -> AppResult<()> {
        let element = match &frame.image {
            Some(image) => {
                if image.bytes.is_empty() {
                    return Err(AppError::invalid_input(format!(
                        "Video frame at {:.3}s carries an empty image",
                        frame.timestamp
                    )));
                }
                format!(
                    r#"<image x="0" y="0" width="{}" height="{}" href="data:{};base64,{}"/>"#,
                    self.width,
                    self.height,
                    html_escape::encode_double_quoted_attribute(&image.mime_type),
                    general_purpose::STANDARD.encode(&image.bytes)
                )
            }
            None => format!(
                r#"<rect x="0" y="0" width="{}" height="{}" fill="{BLANK_BACKGROUND}"/>"#,
                self.width, self.height
            ),
        };
        self.elements.push(element);
        Ok(())
    }

    fn draw_line(&mut self, from: Point, to: Point, color: &str, width_px: f64) {
        self.elements.push(format!(
            r#"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{}" stroke-width="{width_px}" stroke-linecap="round"/>"#,
            from.x,
            from.y,
            to.x,
            to.y,
            html_escape::encode_double_quoted_attribute(color)
        ));
    }

    fn draw_circle(&mut self, center: Point, radius_px: f64, color: &str) {
        self.elements.push(format!(
            r#"<circle cx="{:.1}" cy="{:.1}" r="{radius_px}" fill="{}"/>"#,
            center.x,
            center.y,
            html_escape::encode_double_quoted_attribute(color)
        ));
    }

    fn draw_text(&mut self, text: &str, at: Point, style: &TextStyle) {
        // paint-order puts the outline under the fill
        self.elements.push(format!(
            r#"<text x="{:.1}" y="{:.1}" font-family="sans-serif" font-weight="bold" font-size="{}" fill="{}" stroke="{}" stroke-width="{}" paint-order="stroke">{}</text>"#,
            at.x,
            at.y,
            style.font_px,
            html_escape::encode_double_quoted_attribute(&style.fill),
            html_escape::encode_double_quoted_attribute(&style.outline),
            style.outline_px,
            html_escape::encode_text(text)
        ));
    }

    fn encode(&self, format: ImageFormat, _quality: f64) -> AppResult<String> {
        if format.is_raster() {
            return Err(AppError::invalid_input(format!(
                "SVG canvas cannot encode {format} images"
            )));
        }
        let encoded = general_purpose::STANDARD.encode(self.to_document());
        Ok(format!("data:{};base64,{encoded}", format.mime_type()))
    }
}

/// Creates `SvgCanvas` instances
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgCanvasFactory;

impl CanvasFactory for SvgCanvasFactory {
    fn create(&self, width: u32, height: u32) -> AppResult<Box<dyn Canvas>> {
        if width == 0 || height == 0 {
            return Err(AppError::invalid_input(format!(
                "Canvas dimensions must be positive, got {width}x{height}"
            )));
        }
        Ok(Box::new(SvgCanvas::new(width, height)))
    }
}
