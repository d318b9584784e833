pub mod render_newton;
