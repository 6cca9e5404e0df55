use cairo::{Context, ImageSurface};
use paintbox::config::Config;
use paintbox::input::{FrameInput, Key, KeyPress, Modifiers};
use paintbox::util::Point;
use paintbox::{App, ui};

const SIZE: u32 = 500;

fn make_app(show_fps: bool) -> App {
    let mut config = Config::default();
    config.ui.show_fps = show_fps;
    App::new(&config, SIZE, SIZE).unwrap()
}

fn surface_with_context(width: i32, height: i32) -> (ImageSurface, Context) {
    let surface = ImageSurface::create(cairo::Format::ARgb32, width, height).unwrap();
    let ctx = Context::new(&surface).unwrap();
    (surface, ctx)
}

fn render_app(app: &App) -> ImageSurface {
    let (surface, ctx) = surface_with_context(SIZE as i32, SIZE as i32);
    app.render(&ctx, SIZE, SIZE).unwrap();
    drop(ctx);
    surface
}

fn pixel(surface: &mut ImageSurface, x: i32, y: i32) -> (u8, u8, u8) {
    surface.flush();
    let stride = surface.stride() as usize;
    let data = surface.data().unwrap();
    let offset = y as usize * stride + x as usize * 4;
    let word = u32::from_ne_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ]);
    (
        ((word >> 16) & 0xff) as u8,
        ((word >> 8) & 0xff) as u8,
        (word & 0xff) as u8,
    )
}

fn key(c: char) -> FrameInput {
    FrameInput {
        key_presses: vec![KeyPress {
            key: Key::Char(c),
            modifiers: Modifiers::new(),
        }],
        ..FrameInput::default()
    }
}

fn press(x: f64, y: f64) -> FrameInput {
    FrameInput {
        pointer: Point::new(x, y),
        pointer_pressed: true,
        pointer_down: true,
        ..FrameInput::default()
    }
}

fn hold(x: f64, y: f64) -> FrameInput {
    FrameInput {
        pointer: Point::new(x, y),
        pointer_down: true,
        ..FrameInput::default()
    }
}

fn release(x: f64, y: f64) -> FrameInput {
    FrameInput {
        pointer: Point::new(x, y),
        pointer_released: true,
        ..FrameInput::default()
    }
}

#[test]
fn fresh_app_shows_white_canvas_under_gray_toolbar() {
    let app = make_app(false);
    let mut surface = render_app(&app);

    assert_eq!(pixel(&mut surface, 480, 15), (200, 200, 200));
    assert_eq!(pixel(&mut surface, 250, 250), (255, 255, 255));
    assert_eq!(pixel(&mut surface, 480, 40), (255, 255, 255));
}

#[test]
fn toolbar_labels_draw_text() {
    let app = make_app(false);
    let mut surface = render_app(&app);

    let mut dark = 0;
    for y in 5..28 {
        for x in 5..120 {
            let (r, g, b) = pixel(&mut surface, x, y);
            if r < 100 && g < 100 && b < 100 {
                dark += 1;
            }
        }
    }
    assert!(dark > 0, "title label should leave dark pixels on the toolbar");
}

#[test]
fn help_line_draws_near_bottom() {
    let app = make_app(false);
    let mut surface = render_app(&app);

    let mut inked = 0;
    for y in 480..498 {
        for x in 10..200 {
            if pixel(&mut surface, x, y) != (255, 255, 255) {
                inked += 1;
            }
        }
    }
    assert!(inked > 0, "help line should be visible at the bottom");
}

#[test]
fn circle_commit_shows_filled_disc() {
    let mut app = make_app(false);
    app.frame(&key('c')).unwrap();
    app.frame(&key('3')).unwrap();
    app.frame(&press(200.0, 200.0)).unwrap();
    app.frame(&release(200.0, 250.0)).unwrap();

    let mut surface = render_app(&app);
    assert_eq!(pixel(&mut surface, 200, 200), (0, 121, 241));
    assert_eq!(pixel(&mut surface, 230, 230), (0, 121, 241));
    assert_eq!(pixel(&mut surface, 200, 260), (255, 255, 255));
}

#[test]
fn line_preview_stays_off_canvas() {
    let mut app = make_app(false);
    app.frame(&key('l')).unwrap();
    app.frame(&press(100.0, 300.0)).unwrap();
    app.frame(&hold(300.0, 300.0)).unwrap();

    // Preview is on screen, blended at reduced opacity
    let mut surface = render_app(&app);
    let (r, g, b) = pixel(&mut surface, 200, 300);
    assert!(r > 80 && r < 130, "expected translucent black, got {r}");
    assert_eq!((r, g, b), (r, r, r));

    // ...but the canvas itself is untouched until release
    assert_eq!(app.canvas.pixel(200, 300), Some((255, 255, 255)));

    app.frame(&release(300.0, 300.0)).unwrap();
    assert_eq!(app.canvas.pixel(200, 300), Some((0, 0, 0)));
}

#[test]
fn freehand_drag_paints_trail() {
    let mut app = make_app(false);
    app.frame(&key('2')).unwrap();
    app.frame(&press(100.0, 100.0)).unwrap();
    app.frame(&hold(150.0, 100.0)).unwrap();
    app.frame(&hold(150.0, 150.0)).unwrap();
    app.frame(&release(150.0, 150.0)).unwrap();

    assert_eq!(app.canvas.pixel(125, 100), Some((230, 41, 55)));
    assert_eq!(app.canvas.pixel(150, 125), Some((230, 41, 55)));
    assert_eq!(app.canvas.pixel(125, 140), Some((255, 255, 255)));
}

#[test]
fn render_twice_is_pixel_identical() {
    let mut app = make_app(false);
    app.frame(&press(100.0, 100.0)).unwrap();
    app.frame(&hold(200.0, 180.0)).unwrap();
    app.frame(&release(200.0, 180.0)).unwrap();

    let mut first = render_app(&app);
    let mut second = render_app(&app);
    first.flush();
    second.flush();
    assert_eq!(&*first.data().unwrap(), &*second.data().unwrap());
}

#[test]
fn toolbar_overlay_never_reaches_canvas() {
    let mut app = make_app(true);
    let _ = render_app(&app);
    app.frame(&FrameInput::idle(Point::new(10.0, 10.0))).unwrap();
    let _ = render_app(&app);

    assert_eq!(app.canvas.pixel(480, 15), Some((255, 255, 255)));
    assert_eq!(app.canvas.pixel(20, 490), Some((255, 255, 255)));
}

#[test]
fn fps_overlay_renders_in_corner() {
    let (mut surface, ctx) = surface_with_context(SIZE as i32, SIZE as i32);
    ctx.set_source_rgb(1.0, 1.0, 1.0);
    ctx.paint().unwrap();
    ui::render_fps(
        &ctx,
        60,
        SIZE,
        SIZE,
        &paintbox::draw::FontDescriptor::default(),
    );
    drop(ctx);

    let mut inked = 0;
    for y in 470..495 {
        for x in 415..500 {
            if pixel(&mut surface, x, y) != (255, 255, 255) {
                inked += 1;
            }
        }
    }
    assert!(inked > 0);
}
