use anyhow::Result;
use ringsum::{ClassifierConfig, Coordinate, PolygonSet};

fn main() -> Result<()> {
    env_logger::init();

    let set = PolygonSet::with_config(ClassifierConfig::default())?;
    set.load([[[200., 100.], [400., 100.], [350., 200.], [450., 400.]]])?;

    let snapshot = set.snapshot();
    for y in (50..=450).step_by(50) {
        let row: String = (150..=500)
            .step_by(25)
            .map(|x| {
                let point = Coordinate::new(x as f64, y as f64);
                match snapshot.containing(&point) {
                    Some(idx) => char::from_digit(idx as u32 % 10, 10).unwrap_or('#'),
                    None => '.',
                }
            })
            .collect();
        println!("{y:>4} {row}");
    }

    // A two-vertex ring makes the whole batch fail and keeps the polygon above
    let res = set.load(vec![
        vec![[0., 0.], [100., 0.], [50., 100.]],
        vec![[0., 0.], [1., 1.]],
    ]);
    if let Err(err) = res {
        println!("load refused: {err}");
    }
    println!("{} polygon(s) still loaded", set.len());

    Ok(())
}
