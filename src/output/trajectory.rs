use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use log::info;

use crate::{atom_type::AtomType, integrators::Observer, Atoms, Container, Error};

/// Extended-XYZ trajectory, one frame per call
pub struct XyzTrajectory<W: Write> {
    sink: W,
    header: String,
    frames: usize,
}
impl XyzTrajectory<BufWriter<File>> {
    /// Create (or truncate) a trajectory file
    pub fn create<P: AsRef<Path>>(path: P, container: &Container) -> Result<Self, Error> {
        let file = File::create(path.as_ref())?;
        info!("writing trajectory to {}", path.as_ref().display());
        Ok(Self::new(BufWriter::new(file), container))
    }
}
impl<W: Write> XyzTrajectory<W> {
    pub fn new(sink: W, container: &Container) -> Self {
        let l = container.lengths();
        let pbc: Vec<&str> = crate::utils::Axis::ALL
            .iter()
            .map(|&axis| if container.is_periodic(axis) { "T" } else { "F" })
            .collect();
        let header = format!(
            "Lattice=\"{} 0 0 0 {} 0 0 0 {}\" Properties=species:S:1:pos:R:3 pbc=\"{}\"",
            l[0],
            l[1],
            l[2],
            pbc.join(" ")
        );
        Self {
            sink,
            header,
            frames: 0,
        }
    }

    pub fn write_frame<T: AtomType>(&mut self, atoms: &Atoms<T>) -> Result<(), Error> {
        writeln!(self.sink, "{}", atoms.num_atoms())?;
        writeln!(self.sink, "{}", self.header)?;
        for (i, p) in atoms.positions().iter().enumerate() {
            writeln!(
                self.sink,
                "{} {:.8} {:.8} {:.8}",
                atoms.atom_type(i).symbol(),
                p[0],
                p[1],
                p[2]
            )?;
        }
        self.sink.flush()?;
        self.frames += 1;
        Ok(())
    }

    pub fn frames(&self) -> usize {
        self.frames
    }
    pub fn into_inner(self) -> W {
        self.sink
    }
}

impl<T: AtomType, W: Write> Observer<Atoms<T>> for XyzTrajectory<W> {
    fn observe(&mut self, _step: usize, state: &Atoms<T>) -> Result<(), Error> {
        self.write_frame(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atom_type::Element;

    #[test]
    fn frame_layout() {
        let mut atoms = Atoms::new(vec![Element::copper()]);
        atoms.add_atoms(0, vec![[0.0, 1.5, 2.25]]).unwrap();
        let container = Container::periodic([3.61, 3.61, 3.61]);

        let mut traj = XyzTrajectory::new(Vec::new(), &container);
        traj.write_frame(&atoms).unwrap();
        traj.write_frame(&atoms).unwrap();
        assert_eq!(traj.frames(), 2);

        let text = String::from_utf8(traj.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "1");
        assert_eq!(
            lines[1],
            "Lattice=\"3.61 0 0 0 3.61 0 0 0 3.61\" Properties=species:S:1:pos:R:3 pbc=\"T T T\""
        );
        assert_eq!(lines[2], "Cu 0.00000000 1.50000000 2.25000000");
    }

    #[test]
    fn create_writes_to_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cu.xyz");
        let mut atoms = Atoms::new(vec![Element::copper()]);
        atoms.add_atoms(0, vec![[0.0; 3], [1.0; 3]]).unwrap();

        let mut traj = XyzTrajectory::create(&path, &Container::periodic([5.0; 3])).unwrap();
        traj.write_frame(&atoms).unwrap();
        drop(traj);

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 4);
    }
}
