use crate::geometry::Point;

/// Racing line around the track, counter-clockwise, in track units.
///
/// The loop closes implicitly: the last point connects back to the first.
pub static SHORTCUT_WAYPOINTS: [Point; 70] = [
    Point::new(2.90990644, 0.98407875),
    Point::new(3.31990641, 0.98420088),
    Point::new(3.4199064, 0.98423067),
    Point::new(3.62991234, 0.98429322),
    Point::new(4.18990633, 0.98446003),
    Point::new(4.49991226, 0.98455237),
    Point::new(4.5499063, 0.98456726),
    Point::new(5.31991219, 0.98479663),
    Point::new(5.41991218, 0.98482642),
    Point::new(5.77991215, 0.98493365),
    Point::new(6.2553082, 0.98873702),
    Point::new(6.42648362, 1.00861532),
    Point::new(6.43307007, 1.00938019),
    Point::new(6.58552838, 1.07519014),
    Point::new(6.65414056, 1.12115314),
    Point::new(6.76767029, 1.20752563),
    Point::new(6.86513054, 1.34568336),
    Point::new(6.88302339, 1.3793611),
    Point::new(6.97243225, 1.74776337),
    Point::new(6.96960177, 1.76566469),
    Point::new(6.96188883, 1.81444516),
    Point::new(6.86346611, 2.10632023),
    Point::new(6.7690622, 2.22274942),
    Point::new(6.60065918, 2.36186218),
    Point::new(6.4314447, 2.43673386),
    Point::new(6.08237788, 2.46239682),
    Point::new(5.92238881, 2.46107404),
    Point::new(5.72240248, 2.45942058),
    Point::new(5.67257125, 2.45900858),
    Point::new(5.20260337, 2.45512292),
    Point::new(5.01861984, 2.45668914),
    Point::new(4.96918566, 2.4619779),
    Point::new(4.90986465, 2.46832442),
    Point::new(4.39902628, 2.63606792),
    Point::new(4.01871064, 2.97147931),
    Point::new(3.85290613, 3.174899),
    Point::new(3.76129959, 3.28728782),
    Point::new(3.5341778, 3.56593551),
    Point::new(3.44257126, 3.67832433),
    Point::new(3.30923655, 3.84190797),
    Point::new(3.09720703, 4.08122162),
    Point::new(3.02891715, 4.1234712),
    Point::new(2.99478647, 4.14414731),
    Point::new(2.88433502, 4.18227081),
    Point::new(2.77887123, 4.19261457),
    Point::new(2.78081412, 4.19242402),
    Point::new(2.50940672, 4.18829973),
    Point::new(2.25845167, 4.18096164),
    Point::new(1.99925809, 4.17338266),
    Point::new(1.74859519, 4.16605312),
    Point::new(1.31461304, 4.11409424),
    Point::new(1.2783205, 4.08888491),
    Point::new(1.02484721, 3.77043495),
    Point::new(0.99661118, 3.59068639),
    Point::new(1.16676675, 2.78707146),
    Point::new(1.17861572, 2.73111083),
    Point::new(1.21104008, 2.57797629),
    Point::new(1.23142423, 2.4817055),
    Point::new(1.31634694, 2.08063044),
    Point::new(1.33863869, 1.97535044),
    Point::new(1.39027886, 1.73146298),
    Point::new(1.49782294, 1.28158859),
    Point::new(1.51857442, 1.22992349),
    Point::new(1.52968872, 1.20225212),
    Point::new(1.5434439, 1.18662043),
    Point::new(1.61366728, 1.10681699),
    Point::new(1.63223282, 1.08571869),
    Point::new(1.64459173, 1.07881414),
    Point::new(2.03991248, 0.9838196),
    Point::new(2.74991242, 0.98403109),
];
