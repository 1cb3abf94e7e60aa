const WIDTH: u32 = 640;
const HEIGHT: u32 = 480;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut session =
        mandelzoom::ExplorerSession::new(mandelzoom::DefaultTheme, mandelzoom::StandardFilters);
    session.resize(WIDTH, HEIGHT);

    let frame = session.draw();

    std::fs::create_dir_all("output")?;
    mandelzoom::write_ppm(frame, "output/mandelbrot.ppm")?;

    Ok(())
}
