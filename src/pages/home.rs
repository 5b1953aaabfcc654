use leptos::prelude::*;

use crate::components::hyperbolic_graph::{
	GraphData, GraphEdge, GraphNode, HyperbolicGraphCanvas, ViewMode,
};

/// Sample tree: node `i` hangs off an earlier node, biased towards recent
/// ones so the tree grows deep rather than bushy.
fn generate_sample_data(n: usize) -> GraphData {
	let nodes: Vec<GraphNode> = (0..n)
		.map(|i| GraphNode {
			id: i.to_string(),
			label: if i < 10 {
				Some(format!("Node {}", i))
			} else {
				None
			},
			color: None,
			group: Some((i % 10) as u32),
		})
		.collect();

	let edges: Vec<GraphEdge> = (1..n)
		.map(|i| {
			let r = rand_simple(i);
			let parent = ((1.0 - r * r) * (i as f64)) as usize;
			GraphEdge {
				source: i.to_string(),
				target: parent.min(i - 1).to_string(),
			}
		})
		.collect();

	GraphData { nodes, edges }
}

/// Simple pseudo-random number generator (deterministic for consistency).
fn rand_simple(seed: usize) -> f64 {
	let x = ((seed + 1) * 9301 + 49297) % 233280;
	(x as f64) / 233280.0
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let graph_data = Signal::derive(move || generate_sample_data(150));
	let (mode, set_mode) = signal(ViewMode::default());

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="fullscreen-graph">
				<HyperbolicGraphCanvas data=graph_data mode=mode fullscreen=true />
				<div class="graph-overlay">
					<h1>"Hyperbolic Graph"</h1>
					<p class="subtitle">
						{move || match mode.get() {
							ViewMode::Hyperbolic => {
								"Drag to move the focus. Click a node to centre it. Scroll to change the projection scale."
							}
							ViewMode::Euclidean => {
								"Drag nodes to reposition. Scroll to zoom. Drag background to pan."
							}
						}}
					</p>
					<button on:click=move |_| set_mode.update(|m| *m = m.toggled())>
						{move || format!("View: {}", mode.get().label())}
					</button>
				</div>
			</div>
		</ErrorBoundary>
	}
}
