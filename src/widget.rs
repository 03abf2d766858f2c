use crate::graphics::Canvas;
use crate::state::AppState;
use crate::vertex::Vertex;
use carousel3d::{CarouselController, Item, Vec3, Viewpoint};
use std::io::{self, Write};
use std::time::Instant;

/// Items closer than this to the viewpoint plane are not drawn
const NEAR_PLANE: f64 = 0.1;

/// Terminal cells are roughly twice as tall as they are wide
const CELL_ASPECT: f64 = 2.0;

/// Wireframe outline drawn for an item
struct Shape {
    vertices: &'static [(f64, f64, f64)],
    edges: &'static [(usize, usize)],
}

const CUBE: Shape = Shape {
    vertices: &[
        (-0.5, -0.5, -0.5), // 0
        (0.5, -0.5, -0.5),  // 1
        (0.5, 0.5, -0.5),   // 2
        (-0.5, 0.5, -0.5),  // 3
        (-0.5, -0.5, 0.5),  // 4
        (0.5, -0.5, 0.5),   // 5
        (0.5, 0.5, 0.5),    // 6
        (-0.5, 0.5, 0.5),   // 7
    ],
    edges: &[
        (0, 1),
        (1, 2),
        (2, 3),
        (3, 0), // Front face
        (4, 5),
        (5, 6),
        (6, 7),
        (7, 4), // Back face
        (0, 4),
        (1, 5),
        (2, 6),
        (3, 7), // Connecting edges
    ],
};

const PYRAMID: Shape = Shape {
    vertices: &[
        (-0.5, -0.5, -0.5),
        (0.5, -0.5, -0.5),
        (0.5, -0.5, 0.5),
        (-0.5, -0.5, 0.5),
        (0.0, 0.6, 0.0), // Apex
    ],
    edges: &[(0, 1), (1, 2), (2, 3), (3, 0), (0, 4), (1, 4), (2, 4), (3, 4)],
};

const OCTAHEDRON: Shape = Shape {
    vertices: &[
        (0.6, 0.0, 0.0),
        (-0.6, 0.0, 0.0),
        (0.0, 0.6, 0.0),
        (0.0, -0.6, 0.0),
        (0.0, 0.0, 0.6),
        (0.0, 0.0, -0.6),
    ],
    edges: &[
        (0, 2),
        (0, 3),
        (0, 4),
        (0, 5),
        (1, 2),
        (1, 3),
        (1, 4),
        (1, 5),
        (2, 4),
        (4, 3),
        (3, 5),
        (5, 2),
    ],
};

const SHAPES: [&Shape; 3] = [&CUBE, &PYRAMID, &OCTAHEDRON];

/// Terminal view of the carousel
pub struct CarouselView {
    frames_since_last_update: usize,
    last_fps_calculation: Instant,
    fps: f64,
}

impl CarouselView {
    pub fn new() -> Self {
        CarouselView {
            frames_since_last_update: 0,
            last_fps_calculation: Instant::now(),
            fps: 0.0,
        }
    }

    /// Projects an item's outline onto a canvas of the given size
    ///
    /// Returns `None` when any vertex is behind the near plane.
    fn compute_projected_vertices(
        shape: &Shape,
        item: &Item,
        viewpoint: &Viewpoint,
        width: usize,
        height: usize,
    ) -> Option<Vec<Vertex>> {
        let center = (width as f64 / 2.0, height as f64 / 2.0);
        let scale = height as f64 * 0.9;

        shape
            .vertices
            .iter()
            .map(|&(x, y, z)| {
                let world = item.position + item.orientation * Vec3::new(x, y, z);
                let view_position = viewpoint.to_view_space(&world);
                if view_position.z < NEAR_PLANE {
                    return None;
                }
                let screen_x = center.0 + view_position.x / view_position.z * scale * CELL_ASPECT;
                let screen_y = center.1 - view_position.y / view_position.z * scale;
                Some(Vertex {
                    view_position,
                    screen_position: [screen_x, screen_y],
                })
            })
            .collect()
    }

    /// Rasterizes every visible item into a fresh canvas
    pub fn render(
        &self,
        controller: &CarouselController,
        state: &AppState,
        width: usize,
        height: usize,
    ) -> Canvas {
        let mut canvas = Canvas::new(width, height);
        let viewpoint = controller.viewpoint();

        // Far items first so the nearer outline wins where they overlap
        let mut visible: Vec<(usize, &Item)> = controller
            .items()
            .iter()
            .enumerate()
            .filter(|(_, item)| item.visible)
            .collect();
        visible.sort_by(|(_, a), (_, b)| {
            let da = viewpoint.to_view_space(&a.position).z;
            let db = viewpoint.to_view_space(&b.position).z;
            db.total_cmp(&da)
        });

        for (index, item) in visible {
            let shape = SHAPES[index % SHAPES.len()];
            let Some(vertices) =
                Self::compute_projected_vertices(shape, item, viewpoint, width, height)
            else {
                continue;
            };
            let active = index == controller.active_index();
            for &(start, end) in shape.edges {
                let v0 = &vertices[start];
                let v1 = &vertices[end];
                // Edges on the far side of the item are drawn lighter
                let far = v0.depth().min(v1.depth()) > viewpoint.to_view_space(&item.position).z;
                let glyph = match (active, far) {
                    (true, false) => '#',
                    (true, true) => '*',
                    (false, false) => '+',
                    (false, true) => '.',
                };
                canvas.draw_line(
                    v0.screen_position[0],
                    v0.screen_position[1],
                    v1.screen_position[0],
                    v1.screen_position[1],
                    glyph,
                );
            }
        }

        if state.debug {
            self.draw_debug(&mut canvas, controller);
        }

        if state.paused {
            let text = "Paused";
            let x = canvas.width().saturating_sub(text.len()) / 2;
            let y = canvas.height() / 2;
            canvas.put_str(x, y, text);
        }

        canvas
    }

    fn draw_debug(&self, canvas: &mut Canvas, controller: &CarouselController) {
        let active = controller.active_item();
        let mut lines = vec![
            format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
            format!(
                "Item {}/{}: {}",
                controller.active_index() + 1,
                controller.items().len(),
                active.id
            ),
            format!("Distance: {:.2}", controller.active_distance()),
        ];

        match controller.transition() {
            Some(slide) => lines.push(format!(
                "Slide {:?}: {:.0}%",
                slide.direction,
                slide.progress() * 100.0
            )),
            None => {
                let rotation = controller.rotation();
                if rotation.enabled {
                    lines.push(format!(
                        "Rotating: ({:.1}, {:.1}, {:.1})",
                        rotation.axis.x, rotation.axis.y, rotation.axis.z
                    ));
                }
                let zoom = controller.zoom();
                if zoom.enabled {
                    lines.push(format!("Zooming: {:?}", zoom.direction));
                }
            }
        }
        if !controller.zoom_available() {
            lines.push("Zoom disabled (invalid distance range)".to_string());
        }
        lines.push(format!("FPS: {:.2}", self.fps));

        for (row, line) in lines.iter().enumerate() {
            canvas.put_str(1, row, line);
        }
    }

    /// Renders and writes one frame, updating the FPS estimate
    pub fn draw(
        &mut self,
        out: &mut impl Write,
        controller: &CarouselController,
        state: &AppState,
        width: usize,
        height: usize,
    ) -> io::Result<()> {
        // Update FPS calculation
        self.frames_since_last_update += 1;
        let now = Instant::now();
        let duration = now.duration_since(self.last_fps_calculation);
        if duration.as_secs_f64() >= 1.0 {
            self.fps = self.frames_since_last_update as f64 / duration.as_secs_f64();
            self.frames_since_last_update = 0;
            self.last_fps_calculation = now;
        }

        self.render(controller, state, width, height).flush_to(out)
    }
}
