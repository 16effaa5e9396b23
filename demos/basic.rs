use rand::SeedableRng;
use rand::rngs::StdRng;
use rs_planar_kinematics::kinematic_traits::{Joints, Kinematics, Pose};
use rs_planar_kinematics::kinematics_impl::PlanarKinematics;
use rs_planar_kinematics::parameters::planar_kinematics::Parameters;
use rs_planar_kinematics::utils::{as_radians, dump_joints, dump_positions, random_pose};

fn main() {
    let robot = PlanarKinematics::new(Parameters::new());
    let joints: Joints = as_radians([90.0, 90.0, 180.0]); // Joints are alias of [f64; 3]
    println!("\nInitial joints (degrees): ");
    dump_joints(&joints);

    println!("\nPositions of elbow, wrist and palm tip:");
    let positions = robot.forward_with_joint_positions(&joints);
    dump_positions(&positions);

    println!("\nPalm pointing along x, back to the same spot:");
    let pose = Pose { position: positions[2], alpha: 0.0 };
    match robot.inverse(&pose) {
        Ok(solution) => dump_joints(&solution),
        Err(e) => println!("{}", e),
    }

    println!("\nToo far away:");
    if let Err(e) = robot.inverse(&Pose::new(500.0, 0.0, 0.0)) {
        println!("{}", e);
    }
    println!("As NaN: {:?}", robot.inverse_or_nan(&Pose::new(500.0, 0.0, 0.0)));

    println!("\nA few random poses:");
    let mut rng = StdRng::seed_from_u64(12345);
    for _ in 0..5 {
        let pose = random_pose(&mut rng, robot.parameters());
        print!("x = {:8.3}, y = {:8.3}, alpha = {:6.3}: ", pose.position.x, pose.position.y, pose.alpha);
        match robot.inverse(&pose) {
            Ok(solution) => dump_joints(&solution),
            Err(e) => println!("{}", e),
        }
    }

    println!("\nParameters:\n{}", robot.parameters().to_yaml());
}
