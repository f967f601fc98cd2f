/*
 * Flocking Simulation
 *
 * A windowed 2D flocking simulation: point agents follow alignment and
 * cohesion rules, bounce off the viewport edges, and are drawn once per
 * frame. Parameters can be adjusted live through the control panel.
 */

use flock2d::app;

fn main() {
    nannou::app(app::model).update(app::update).run();
}
