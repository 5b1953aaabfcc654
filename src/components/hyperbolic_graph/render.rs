use std::f64::consts::PI;

use force_graph::DefaultNodeIdx;
use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, Path2d};

use super::state::{GraphState, NODE_RADIUS};
use super::types::ViewMode;

const BACKGROUND: &str = "#1a1a2e";
const DISK_FILL: &str = "#16213e";

fn ease_out_cubic(t: f64) -> f64 {
	1.0 - (1.0 - t).powi(3)
}

pub fn render(state: &GraphState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	match state.mode {
		ViewMode::Euclidean => render_euclidean(state, ctx),
		ViewMode::Hyperbolic => render_hyperbolic(state, ctx),
	}
}

/// Edge opacity and width factor. Highlighted edges brighten while the rest
/// fade, `t` running from 0 (no highlight) to 1.
fn edge_style(state: &GraphState, src: DefaultNodeIdx, tgt: DefaultNodeIdx, t: f64) -> (f64, f64) {
	if state.is_highlighted(src) && state.is_highlighted(tgt) {
		(0.6 + 0.3 * t, 1.0 + 0.3 * t)
	} else {
		(0.6 - 0.45 * t, 1.0 - 0.3 * t)
	}
}

/// Node opacity and radius factor.
fn node_style(state: &GraphState, idx: DefaultNodeIdx, t: f64) -> (f64, f64) {
	if !state.has_active_highlight() {
		(1.0, 1.0)
	} else if state.is_hovered(idx) {
		(1.0, 1.0 + 0.35 * t)
	} else if state.is_highlighted(idx) {
		(1.0, 1.0 + 0.2 * t)
	} else {
		(1.0 - 0.7 * t, 1.0 - 0.15 * t)
	}
}

fn set_edge_dash(state: &GraphState, ctx: &CanvasRenderingContext2d, scale: f64) {
	let (dash, gap) = (8.0 / scale, 4.0 / scale);
	let _ = ctx.set_line_dash(&js_sys::Array::of2(
		&JsValue::from_f64(dash),
		&JsValue::from_f64(gap),
	));
	ctx.set_line_dash_offset(-(state.flow_time * 30.0) % (dash + gap));
}

fn draw_marker(
	ctx: &CanvasRenderingContext2d,
	(x, y, radius): (f64, f64, f64),
	color: &str,
	alpha: f64,
	ring: Option<f64>,
) {
	ctx.set_global_alpha(alpha);
	ctx.begin_path();
	let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
	ctx.set_fill_style_str(color);
	ctx.fill();
	ctx.set_global_alpha(1.0);

	if let Some(line_width) = ring {
		ctx.begin_path();
		let _ = ctx.arc(x, y, radius + 2.0 * line_width, 0.0, 2.0 * PI);
		ctx.set_stroke_style_str("rgba(255, 255, 255, 0.7)");
		ctx.set_line_width(line_width);
		ctx.stroke();
	}
}

fn draw_label(ctx: &CanvasRenderingContext2d, label: &str, x: f64, y: f64, size: f64, alpha: f64) {
	ctx.set_fill_style_str(&format!("rgba(255, 255, 255, {})", alpha * 0.8));
	ctx.set_font(&format!("{size}px sans-serif"));
	let _ = ctx.fill_text(label, x, y);
}

fn render_euclidean(state: &GraphState, ctx: &CanvasRenderingContext2d) {
	let k = state.transform.k;
	let t = ease_out_cubic(state.hover.highlight_t);
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(k, k);

	set_edge_dash(state, ctx, k);
	state.graph.visit_edges(|n1, n2, _| {
		let (x1, y1, x2, y2) = (n1.x() as f64, n1.y() as f64, n2.x() as f64, n2.y() as f64);
		let (dx, dy) = (x2 - x1, y2 - y1);
		let dist = (dx * dx + dy * dy).sqrt();
		if dist < 0.001 {
			return;
		}
		let (alpha, width) = edge_style(state, n1.index(), n2.index(), t);
		ctx.set_stroke_style_str(&format!("rgba(100, 180, 255, {alpha})"));
		ctx.set_line_width(1.5 / k * width);

		let (ux, uy) = (dx / dist, dy / dist);
		ctx.begin_path();
		ctx.move_to(x1 + ux * NODE_RADIUS, y1 + uy * NODE_RADIUS);
		ctx.line_to(x2 - ux * NODE_RADIUS, y2 - uy * NODE_RADIUS);
		ctx.stroke();
	});
	let _ = ctx.set_line_dash(&js_sys::Array::new());

	state.graph.visit_nodes(|node| {
		let idx = node.index();
		let (alpha, grow) = node_style(state, idx, t);
		let (x, y, radius) = (node.x() as f64, node.y() as f64, NODE_RADIUS * grow);
		let ring = (state.is_hovered(idx) && t > 0.01).then_some(1.5 / k);
		draw_marker(ctx, (x, y, radius), &node.data.user_data.color, alpha, ring);
		if let Some(label) = &node.data.user_data.label {
			draw_label(ctx, label, x + radius + 3.0, y + 3.0, 10.0 / k.max(0.5), alpha);
		}
	});
	ctx.restore();
}

fn render_hyperbolic(state: &GraphState, ctx: &CanvasRenderingContext2d) {
	let status = state.status_message();
	let Some(disk) = state.disk() else {
		if let Some(message) = &status {
			draw_label(ctx, message, 12.0, state.height - 12.0, 12.0, 1.0);
		}
		return;
	};
	let c = disk.center();
	ctx.begin_path();
	let _ = ctx.arc(c.x, c.y, disk.radius(), 0.0, 2.0 * PI);
	ctx.set_fill_style_str(DISK_FILL);
	ctx.fill();
	ctx.set_stroke_style_str("rgba(100, 180, 255, 0.35)");
	ctx.set_line_width(1.0);
	ctx.stroke();

	if let Some(message) = &status {
		draw_label(ctx, message, 12.0, state.height - 12.0, 12.0, 1.0);
		return;
	}

	let t = ease_out_cubic(state.hover.highlight_t);
	set_edge_dash(state, ctx, 1.0);
	for (src, tgt, path) in &state.edge_paths {
		let Ok(path) = Path2d::new_with_path_string(&path.to_string()) else {
			continue;
		};
		let (alpha, width) = edge_style(state, *src, *tgt, t);
		ctx.set_stroke_style_str(&format!("rgba(100, 180, 255, {alpha})"));
		ctx.set_line_width(1.5 * width);
		ctx.stroke_with_path(&path);
	}
	let _ = ctx.set_line_dash(&js_sys::Array::new());

	state.graph.visit_nodes(|node| {
		let idx = node.index();
		let Some(projected) = state.projected.get(&idx) else {
			return;
		};
		let circle = &projected.circle;
		let (alpha, _) = node_style(state, idx, t);
		let ring = (state.is_hovered(idx) && t > 0.01).then_some(1.5);
		draw_marker(ctx, (circle.cx, circle.cy, circle.r), &node.data.user_data.color, alpha, ring);
		// Labels shrink with their marker and vanish near the rim.
		let size = (circle.r * 1.2).min(14.0);
		if let (Some(label), true) = (&node.data.user_data.label, size >= 6.0) {
			draw_label(ctx, label, circle.cx + circle.r + 3.0, circle.cy + 3.0, size, alpha);
		}
	});
}
