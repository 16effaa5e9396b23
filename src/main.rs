use std::path::PathBuf;

use clap::{Parser, Subcommand};

use rs_planar_kinematics::kinematic_traits::{Kinematics, Pose};
use rs_planar_kinematics::kinematics_impl::PlanarKinematics;
use rs_planar_kinematics::parameters::planar_kinematics::Parameters;
use rs_planar_kinematics::triangle::ab_angle;

#[derive(Parser)]
#[command(version, propagate_version = true)]
#[command(about = "Forward and inverse kinematics of a planar three-link arm", long_about = None)]
struct Args {
    /// YAML file with link lengths. The reference arm (150, 120, 90) is used if not given.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Angles are given and printed in degrees rather than radians.
    #[arg(short, long)]
    degrees: bool,

    /// Level of verbosity.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Angle between sides A and B of the triangle with sides A, B, C.
    Triangle {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
        #[arg(allow_negative_numbers = true)]
        c: f64,
    },
    /// Positions of elbow, wrist and palm tip for the given joint angles.
    Forward {
        #[arg(allow_negative_numbers = true)]
        shoulder: f64,
        #[arg(allow_negative_numbers = true)]
        elbow: f64,
        #[arg(allow_negative_numbers = true)]
        wrist: f64,
    },
    /// Joint angles that bring the palm tip to (X, Y) with orientation ALPHA.
    Inverse {
        #[arg(allow_negative_numbers = true)]
        x: f64,
        #[arg(allow_negative_numbers = true)]
        y: f64,
        #[arg(allow_negative_numbers = true)]
        alpha: f64,
    },
    /// Print the link lengths in use.
    Params,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut log_config = simplelog::ConfigBuilder::new();
    log_config.set_target_level(log::LevelFilter::Off);
    log_config.set_location_level(log::LevelFilter::Off);

    let log_level = match args.verbose {
        0 => log::LevelFilter::Error,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    simplelog::TermLogger::init(
        log_level,
        log_config.build(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    let parameters = match &args.config {
        Some(path) => Parameters::from_yaml_file(path)?,
        None => Parameters::new(),
    };
    log::info!("Link lengths: upper arm {}, forearm {}, palm {}",
               parameters.upper_arm, parameters.forearm, parameters.palm);

    let to_rad = |angle: f64| if args.degrees { angle.to_radians() } else { angle };
    let from_rad = |angle: f64| if args.degrees { angle.to_degrees() } else { angle };

    let kinematics = PlanarKinematics::new(parameters);

    match args.command {
        Command::Triangle { a, b, c } => match ab_angle(a, b, c) {
            Ok(angle) => println!("{:.6}", from_rad(angle)),
            Err(e) => println!("{}", e),
        },
        Command::Forward { shoulder, elbow, wrist } => {
            let joints = [to_rad(shoulder), to_rad(elbow), to_rad(wrist)];
            let positions = kinematics.forward_with_joint_positions(&joints);
            for (name, p) in ["elbow", "wrist", "palm"].iter().zip(positions.iter()) {
                println!("{:>5}: {:.6} {:.6}", name, p.x, p.y);
            }
        }
        Command::Inverse { x, y, alpha } => {
            match kinematics.inverse(&Pose::new(x, y, to_rad(alpha))) {
                Ok(joints) => println!("{:.6} {:.6} {:.6}",
                                       from_rad(joints[0]), from_rad(joints[1]), from_rad(joints[2])),
                Err(e) => println!("{}", e),
            }
        }
        Command::Params => print!("{}", parameters.to_yaml()),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triangle_accepts_negative_sides() {
        let args = Args::try_parse_from(["rs-planar-kinematics", "triangle", "-1", "2", "3"])
            .expect("negative side must parse");
        match args.command {
            Command::Triangle { a, b, c } => {
                assert_eq!((a, b, c), (-1.0, 2.0, 3.0));
                assert!(ab_angle(a, b, c).is_err());
            }
            _ => panic!("Expected triangle command"),
        }
    }

    #[test]
    fn test_inverse_accepts_negative_coordinates() {
        let args = Args::try_parse_from(["rs-planar-kinematics", "--degrees", "inverse", "-100", "-50", "-30"])
            .expect("negative coordinates must parse");
        assert!(args.degrees);
        assert!(matches!(args.command, Command::Inverse { x, y, alpha }
            if x == -100.0 && y == -50.0 && alpha == -30.0));
    }
}
