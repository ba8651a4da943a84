//! Embedded coarse world outline used when no GeoJSON layer files are configured.
//!
//! Coordinates are (longitude, latitude) in degrees, a few dozen vertices per landmass.
//! Good enough to orient a city marker; use Natural Earth files for real detail.

use super::{LayerKind, LonLat, Shape};

const NORTH_AMERICA: &[LonLat] = &[
    (-163.0, 55.0), (-158.0, 57.0), (-152.0, 59.0), (-150.0, 61.0), (-146.0, 60.5),
    (-140.0, 59.8), (-136.0, 58.0), (-131.0, 54.5), (-128.0, 51.0), (-124.0, 48.5),
    (-124.0, 46.0), (-124.2, 42.0), (-122.5, 37.8), (-120.5, 34.5), (-117.2, 32.7),
    (-114.0, 28.0), (-110.0, 23.0), (-112.5, 29.5), (-109.0, 26.0), (-105.5, 20.5),
    (-103.0, 18.2), (-98.0, 16.0), (-94.0, 16.0), (-92.0, 14.5), (-88.0, 13.3),
    (-86.0, 11.5), (-85.7, 10.0), (-83.0, 8.2), (-80.0, 7.3), (-77.4, 8.6),
    (-79.5, 9.5), (-81.5, 9.0), (-83.5, 10.8), (-83.5, 14.5), (-86.0, 16.0),
    (-88.3, 16.0), (-88.0, 18.5), (-87.5, 21.5), (-90.5, 21.2), (-91.0, 19.0),
    (-94.5, 18.2), (-96.0, 19.5), (-97.5, 22.0), (-97.5, 25.5), (-97.0, 28.0),
    (-94.0, 29.6), (-90.5, 29.0), (-89.0, 30.2), (-85.5, 30.0), (-84.0, 30.0),
    (-82.7, 28.0), (-81.5, 25.2), (-80.2, 25.5), (-80.5, 28.5), (-81.3, 30.5),
    (-79.5, 33.0), (-77.0, 34.5), (-75.5, 35.3), (-76.0, 37.0), (-74.0, 40.5),
    (-70.0, 41.5), (-70.5, 43.0), (-67.0, 44.8), (-66.0, 43.8), (-61.0, 45.3),
    (-60.0, 46.5), (-64.0, 48.5), (-66.0, 50.2), (-60.0, 50.2), (-57.0, 51.5),
    (-55.7, 52.5), (-58.0, 54.5), (-61.5, 56.5), (-64.5, 60.3), (-70.0, 61.0),
    (-78.0, 62.5), (-77.5, 60.0), (-76.8, 57.0), (-79.0, 54.5), (-79.0, 51.5),
    (-82.0, 52.8), (-85.0, 55.3), (-88.0, 56.5), (-92.5, 57.0), (-94.5, 59.0),
    (-94.0, 61.0), (-90.0, 64.0), (-87.0, 66.5), (-85.0, 69.5), (-90.0, 68.5),
    (-95.0, 68.0), (-98.0, 67.8), (-108.0, 68.0), (-115.0, 68.5), (-124.0, 69.5),
    (-129.0, 70.0), (-135.0, 69.0), (-141.0, 69.7), (-150.0, 70.5), (-156.5, 71.3),
    (-161.0, 70.3), (-166.0, 68.5), (-163.0, 66.5), (-168.0, 65.6), (-161.0, 64.5),
    (-165.0, 62.5), (-165.0, 60.5), (-162.0, 58.5), (-157.0, 58.7),
];

const GREENLAND: &[LonLat] = &[
    (-73.0, 78.0), (-66.0, 81.0), (-60.0, 82.0), (-40.0, 83.5), (-25.0, 83.0),
    (-18.0, 81.5), (-20.0, 78.0), (-18.0, 75.0), (-22.0, 72.0), (-22.0, 70.0),
    (-32.0, 68.2), (-40.0, 65.0), (-43.0, 60.0), (-47.0, 60.8), (-50.0, 63.5),
    (-53.0, 66.0), (-54.0, 70.0), (-56.0, 73.0), (-60.0, 76.0), (-68.0, 77.5),
];

const BAFFIN_ISLAND: &[LonLat] = &[
    (-62.0, 66.5), (-66.0, 62.0), (-73.0, 64.0), (-78.0, 64.5), (-74.0, 68.0),
    (-82.0, 70.0), (-88.0, 71.0), (-80.0, 73.7), (-70.0, 72.0), (-67.0, 69.5),
];

const VICTORIA_ISLAND: &[LonLat] = &[
    (-118.0, 69.0), (-102.0, 68.5), (-101.0, 70.0), (-107.0, 73.0), (-118.0, 72.5),
];

const ELLESMERE_ISLAND: &[LonLat] = &[
    (-90.0, 76.5), (-80.0, 76.0), (-75.0, 79.0), (-62.0, 82.0), (-80.0, 83.0),
    (-95.0, 81.0), (-90.0, 79.0),
];

const CUBA: &[LonLat] = &[
    (-84.9, 21.9), (-83.0, 23.0), (-80.5, 23.1), (-77.5, 21.9), (-74.2, 20.2),
    (-77.5, 19.9), (-78.5, 21.6), (-81.5, 22.2), (-83.5, 21.9),
];

const HISPANIOLA: &[LonLat] = &[
    (-74.4, 18.5), (-72.8, 19.9), (-70.0, 19.7), (-68.4, 18.6), (-71.4, 17.6),
    (-74.4, 18.2),
];

const SOUTH_AMERICA: &[LonLat] = &[
    (-77.3, 8.7), (-75.5, 10.5), (-72.0, 12.0), (-71.5, 10.8), (-68.0, 10.6),
    (-64.0, 10.6), (-61.5, 10.2), (-60.0, 8.5), (-57.0, 6.0), (-53.0, 5.5),
    (-51.0, 4.0), (-50.0, 1.5), (-48.5, -1.0), (-44.5, -2.5), (-40.0, -2.8),
    (-35.0, -5.5), (-35.0, -9.0), (-37.5, -12.5), (-39.0, -15.5), (-39.5, -19.0),
    (-41.0, -22.0), (-44.0, -23.0), (-48.0, -25.8), (-48.6, -28.5), (-51.0, -31.0),
    (-53.5, -34.0), (-56.5, -35.0), (-57.5, -38.0), (-62.0, -39.0), (-65.0, -41.0),
    (-64.5, -42.5), (-67.0, -46.0), (-66.0, -48.0), (-69.0, -51.0), (-68.5, -52.5),
    (-70.0, -55.0), (-74.0, -53.0), (-75.5, -48.0), (-74.0, -44.0), (-73.5, -40.0),
    (-73.5, -37.0), (-71.5, -32.0), (-71.5, -28.0), (-70.5, -23.0), (-70.2, -18.5),
    (-75.5, -15.0), (-77.0, -12.0), (-79.5, -8.0), (-81.0, -6.0), (-81.0, -4.5),
    (-80.0, -2.5), (-80.3, 0.0), (-79.0, 1.5), (-77.7, 3.5), (-77.5, 6.5),
];

const AFRICA: &[LonLat] = &[
    (-5.9, 35.8), (-9.5, 32.5), (-9.8, 29.5), (-13.0, 27.5), (-17.0, 21.0),
    (-16.5, 16.5), (-17.5, 14.7), (-16.7, 12.5), (-13.5, 9.5), (-11.0, 7.0),
    (-7.5, 4.4), (-4.0, 5.2), (1.0, 6.0), (4.5, 6.3), (8.5, 4.5),
    (9.7, 3.5), (9.3, 0.0), (11.8, -5.0), (13.3, -9.0), (12.4, -13.5),
    (11.8, -18.0), (14.5, -23.0), (15.2, -27.0), (17.0, -29.5), (18.4, -34.0),
    (20.0, -34.8), (25.5, -34.0), (28.0, -32.7), (31.0, -29.5), (32.8, -26.0),
    (35.5, -24.0), (35.5, -21.0), (39.5, -17.0), (40.5, -14.5), (40.5, -10.5),
    (39.5, -7.0), (39.2, -4.7), (41.5, -1.7), (44.0, 1.5), (48.0, 5.0),
    (51.0, 10.4), (48.0, 11.2), (43.5, 11.5), (43.0, 12.5), (39.5, 15.5),
    (38.5, 18.0), (37.3, 21.5), (35.5, 24.0), (33.5, 27.5), (32.5, 30.0),
    (31.0, 31.5), (29.0, 30.9), (25.0, 31.6), (20.0, 30.8), (19.8, 32.3),
    (15.5, 32.2), (11.0, 33.3), (10.2, 36.8), (8.0, 37.0), (3.0, 36.8),
    (-2.0, 35.1),
];

const MADAGASCAR: &[LonLat] = &[
    (49.3, -12.0), (50.5, -15.5), (49.8, -17.5), (48.0, -22.5), (47.0, -25.0),
    (45.0, -25.5), (43.7, -23.5), (43.3, -21.5), (44.4, -19.5), (44.0, -17.0),
    (46.5, -15.8), (48.0, -14.0),
];

const EURASIA: &[LonLat] = &[
    (34.2, 31.3), (35.0, 33.0), (35.9, 35.5), (36.0, 36.7), (32.5, 36.1),
    (30.5, 36.5), (28.0, 36.7), (26.5, 38.5), (26.2, 40.1), (26.0, 40.8),
    (23.0, 40.5), (24.0, 38.0), (22.5, 36.5), (21.5, 37.5), (21.0, 39.5),
    (19.5, 41.8), (19.2, 42.5), (16.5, 43.5), (14.5, 45.0), (13.7, 45.7),
    (12.3, 45.3), (12.5, 44.0), (14.0, 42.0), (16.0, 41.4), (18.5, 40.1),
    (17.0, 39.0), (16.0, 38.0), (15.6, 40.1), (14.0, 41.0), (12.3, 41.7),
    (10.5, 43.0), (9.0, 44.4), (7.5, 43.8), (5.0, 43.3), (3.2, 43.0),
    (3.2, 41.9), (0.9, 41.0), (-0.3, 39.5), (0.0, 38.7), (-0.8, 37.6),
    (-2.1, 36.7), (-5.6, 36.0), (-6.3, 36.8), (-7.4, 37.2), (-8.9, 37.0),
    (-8.8, 38.7), (-9.5, 38.7), (-8.8, 42.5), (-9.2, 43.0), (-7.0, 43.6),
    (-3.5, 43.4), (-1.5, 43.4), (-1.2, 46.0), (-2.2, 47.2), (-4.5, 48.0),
    (-1.5, 48.7), (-1.2, 49.4), (1.5, 50.2), (2.5, 51.1), (4.0, 51.7),
    (4.8, 53.0), (7.0, 53.5), (8.5, 53.8), (8.6, 55.5), (8.1, 56.9),
    (10.5, 57.6), (10.5, 56.2), (12.0, 54.2), (14.0, 54.0), (18.5, 54.8),
    (21.0, 55.0), (21.0, 56.8), (24.0, 57.2), (24.0, 59.3), (28.0, 59.7),
    (24.0, 60.0), (22.0, 60.3), (21.5, 61.5), (21.5, 63.5), (25.5, 65.0),
    (22.0, 65.6), (21.0, 64.2), (19.0, 63.5), (17.5, 62.3), (17.3, 60.7),
    (18.8, 59.8), (16.5, 57.5), (14.2, 55.4), (12.9, 55.6), (12.5, 56.5),
    (11.3, 58.4), (10.5, 59.5), (8.0, 58.1), (5.5, 58.8), (5.0, 61.0),
    (5.2, 62.5), (8.5, 63.5), (11.0, 64.9), (13.5, 67.5), (16.0, 69.0),
    (19.0, 70.0), (23.5, 70.8), (28.0, 71.0), (31.0, 70.0), (33.0, 69.3),
    (36.5, 69.0), (41.0, 67.5), (40.5, 66.0), (44.0, 66.2), (44.0, 68.5),
    (53.0, 68.5), (60.0, 69.8), (66.5, 70.5), (68.5, 73.0), (72.0, 72.8),
    (80.0, 72.4), (80.5, 73.6), (87.0, 74.5), (95.0, 76.0), (104.0, 77.7),
    (112.0, 76.0), (113.5, 73.5), (119.0, 73.0), (129.0, 71.5), (131.0, 70.8),
    (140.0, 72.5), (150.0, 71.5), (160.0, 69.6), (170.0, 69.8), (178.0, 69.4),
    (180.0, 68.9), (180.0, 65.0), (178.0, 64.5), (177.0, 62.5), (173.0, 61.5),
    (170.0, 60.0), (164.0, 59.8), (163.0, 58.0), (162.0, 56.5), (161.8, 55.0),
    (156.7, 51.0), (156.0, 57.5), (160.0, 61.5), (154.0, 59.3), (150.0, 59.6),
    (143.0, 59.3), (138.0, 56.3), (135.2, 54.7), (141.3, 52.2), (140.5, 48.5),
    (138.0, 46.6), (135.0, 43.5), (131.5, 42.8), (129.7, 41.0), (128.0, 39.0),
    (129.4, 36.0), (129.3, 35.2), (127.0, 34.6), (126.3, 34.5), (126.5, 37.0),
    (125.0, 37.7), (124.5, 39.8), (121.5, 40.8), (119.0, 39.2), (117.7, 39.0),
    (118.9, 37.5), (122.5, 37.4), (120.3, 36.0), (119.3, 35.0), (120.9, 32.5),
    (121.9, 30.9), (121.5, 28.5), (119.7, 25.6), (116.5, 22.9), (113.5, 22.2),
    (110.5, 21.2), (108.5, 21.6), (106.5, 20.2), (105.7, 18.8), (106.7, 17.0),
    (108.8, 15.3), (109.3, 12.0), (107.5, 10.5), (105.0, 8.6), (104.8, 10.5),
    (103.0, 10.7), (100.8, 12.7), (99.2, 10.0), (100.5, 7.0), (102.5, 6.0),
    (103.5, 4.0), (104.2, 1.4), (103.4, 1.3), (101.0, 2.8), (100.3, 5.5),
    (98.5, 8.0), (98.3, 10.0), (97.8, 14.0), (97.5, 16.5), (95.0, 15.8),
    (94.3, 18.8), (93.5, 19.5), (92.3, 20.8), (91.8, 22.4), (90.5, 22.0),
    (89.0, 21.7), (87.0, 21.5), (86.8, 20.2), (85.0, 19.2), (82.3, 16.5),
    (80.3, 15.5), (80.3, 13.0), (79.8, 10.3), (78.2, 8.9), (77.5, 8.1),
    (76.5, 9.5), (75.5, 11.8), (74.5, 14.5), (73.4, 16.5), (72.8, 19.2),
    (72.6, 21.3), (70.5, 20.8), (69.0, 22.5), (68.5, 23.5), (67.0, 24.8),
    (66.5, 25.4), (62.0, 25.2), (58.5, 25.6), (57.3, 27.1), (56.0, 27.1),
    (54.0, 26.6), (51.5, 27.9), (50.2, 29.9), (48.5, 29.9), (48.0, 29.0),
    (50.0, 26.3), (51.5, 25.3), (51.6, 24.2), (54.0, 24.2), (56.3, 26.2),
    (56.4, 24.8), (58.5, 23.6), (59.8, 22.5), (58.5, 20.5), (57.7, 19.0),
    (55.0, 17.2), (52.2, 15.6), (49.0, 14.1), (45.0, 12.8), (43.5, 12.6),
    (42.8, 15.0), (42.6, 16.8), (40.8, 19.7), (39.1, 21.7), (38.0, 24.1),
    (36.5, 26.0), (35.0, 28.0), (34.9, 29.5), (34.2, 27.8), (32.6, 29.9),
    (32.3, 31.3),
];

const BLACK_SEA: &[LonLat] = &[
    (27.5, 42.5), (28.0, 41.2), (29.0, 41.2), (31.3, 41.1), (33.5, 42.0),
    (36.0, 41.7), (38.5, 40.9), (41.5, 41.5), (41.6, 42.6), (39.7, 43.9),
    (37.5, 44.7), (36.5, 45.3), (35.0, 45.0), (33.5, 44.5), (32.5, 45.4),
    (33.6, 46.1), (31.7, 46.6), (30.2, 45.8), (29.7, 45.2), (28.7, 44.2),
    (28.0, 43.2),
];

const CHUKOTKA_EAST: &[LonLat] = &[
    (-180.0, 68.9), (-175.0, 67.5), (-171.5, 66.9), (-170.0, 66.0), (-172.5, 64.5),
    (-180.0, 65.0),
];

const GREAT_BRITAIN: &[LonLat] = &[
    (-5.7, 50.0), (-3.0, 50.6), (1.4, 51.2), (1.7, 52.7), (0.2, 53.5),
    (-0.5, 54.5), (-1.6, 55.6), (-2.0, 56.0), (-1.8, 57.6), (-3.5, 57.6),
    (-4.0, 58.6), (-5.0, 58.6), (-6.2, 57.5), (-5.6, 56.0), (-5.0, 55.0),
    (-3.0, 54.9), (-3.2, 54.0), (-3.0, 53.3), (-4.6, 53.3), (-4.2, 52.3),
    (-5.3, 51.8), (-3.0, 51.5), (-4.2, 51.2),
];

const IRELAND: &[LonLat] = &[
    (-6.0, 52.0), (-6.0, 53.9), (-5.5, 54.7), (-7.3, 55.3), (-8.5, 54.5),
    (-10.0, 54.2), (-10.0, 53.4), (-9.6, 52.0), (-10.3, 51.7), (-8.5, 51.6),
    (-6.4, 52.2),
];

const ICELAND: &[LonLat] = &[
    (-22.5, 64.0), (-24.0, 65.5), (-22.0, 66.4), (-16.0, 66.5), (-14.0, 65.5),
    (-14.5, 64.4), (-18.5, 63.4),
];

const SVALBARD: &[LonLat] = &[
    (11.0, 78.5), (16.0, 80.0), (27.0, 80.0), (22.0, 78.3), (16.5, 76.5),
];

const HONSHU: &[LonLat] = &[
    (130.9, 34.0), (133.0, 35.5), (135.5, 35.7), (136.7, 37.2), (138.5, 37.5),
    (140.0, 39.8), (140.0, 41.3), (141.5, 41.3), (142.0, 39.5), (141.0, 37.0),
    (140.7, 35.5), (138.8, 34.6), (137.0, 34.6), (135.5, 33.5), (135.0, 34.6),
    (132.5, 34.2),
];

const KYUSHU: &[LonLat] = &[
    (129.7, 33.1), (130.2, 31.3), (131.3, 31.4), (131.7, 33.0), (130.9, 33.9),
];

const HOKKAIDO: &[LonLat] = &[
    (140.0, 41.5), (140.0, 43.2), (141.6, 45.4), (145.3, 44.3), (145.5, 43.2),
    (143.5, 42.0), (141.2, 42.3),
];

const SRI_LANKA: &[LonLat] = &[
    (79.8, 8.0), (80.0, 9.8), (81.0, 8.5), (81.8, 7.5), (81.4, 6.2), (80.2, 6.0),
];

const LUZON: &[LonLat] = &[
    (120.6, 14.3), (120.4, 16.5), (120.6, 18.5), (122.2, 18.5), (122.5, 17.0),
    (121.5, 15.3), (124.0, 14.0), (123.5, 13.0), (121.8, 13.8),
];

const BORNEO: &[LonLat] = &[
    (109.0, 1.5), (110.0, -1.5), (110.3, -3.0), (114.5, -4.0), (116.5, -3.5),
    (117.5, 0.5), (119.0, 1.0), (118.0, 4.9), (117.0, 7.0), (116.0, 6.7),
    (115.3, 5.0), (113.2, 3.2), (111.3, 2.3), (109.6, 2.0),
];

const SUMATRA: &[LonLat] = &[
    (95.3, 5.6), (97.5, 5.2), (100.3, 2.2), (103.8, 0.0), (106.0, -3.0),
    (106.0, -5.8), (104.5, -5.9), (102.3, -4.0), (100.3, -1.0), (98.7, 1.7),
    (96.5, 3.8),
];

const JAVA: &[LonLat] = &[
    (105.2, -6.8), (106.2, -5.9), (108.3, -6.2), (111.0, -6.4), (112.6, -6.9),
    (114.5, -7.8), (114.4, -8.7), (110.5, -8.2), (106.5, -7.4),
];

const NEW_GUINEA: &[LonLat] = &[
    (131.0, -1.4), (134.0, -0.9), (137.5, -1.5), (141.0, -2.6), (145.7, -4.8),
    (147.5, -6.2), (148.0, -8.0), (150.2, -10.6), (147.0, -10.1), (144.0, -7.8),
    (142.5, -9.3), (138.5, -8.4), (137.8, -5.4), (135.0, -4.4), (132.7, -4.0),
    (132.0, -2.8),
];

const AUSTRALIA: &[LonLat] = &[
    (113.5, -22.0), (114.2, -26.2), (115.0, -30.0), (115.7, -33.5), (115.0, -34.3),
    (118.0, -35.0), (123.5, -33.9), (126.0, -32.3), (131.0, -31.5), (134.0, -32.5),
    (135.9, -34.8), (137.8, -33.0), (137.5, -35.6), (139.7, -37.2), (140.6, -38.0),
    (143.5, -38.8), (146.3, -39.1), (148.0, -37.8), (150.0, -37.5), (150.8, -34.2),
    (153.0, -31.0), (153.6, -28.5), (153.0, -25.2), (151.0, -23.5), (149.5, -22.3),
    (146.5, -19.0), (145.4, -15.0), (143.5, -14.0), (142.5, -10.7), (141.5, -13.5),
    (141.5, -17.0), (140.0, -17.7), (137.5, -16.0), (135.5, -15.0), (136.8, -12.2),
    (132.7, -11.5), (131.0, -12.2), (129.5, -14.9), (126.8, -13.8), (124.5, -16.3),
    (122.2, -18.0), (121.0, -19.5), (117.0, -20.6), (114.0, -21.8),
];

const TASMANIA: &[LonLat] = &[
    (144.6, -40.7), (148.3, -40.9), (148.0, -43.2), (146.0, -43.6), (145.2, -42.2),
];

const NEW_ZEALAND_NORTH: &[LonLat] = &[
    (172.7, -34.4), (174.5, -35.8), (175.9, -37.5), (178.5, -37.7), (177.9, -39.2),
    (176.9, -39.6), (176.0, -41.3), (174.8, -41.3), (175.2, -40.4), (173.8, -39.2),
    (174.6, -38.2), (174.3, -36.9), (173.0, -35.2),
];

const NEW_ZEALAND_SOUTH: &[LonLat] = &[
    (172.7, -40.5), (174.3, -41.7), (173.0, -43.6), (171.2, -44.5), (169.2, -46.6),
    (166.5, -46.0), (168.3, -44.0), (170.5, -43.0), (172.1, -41.4),
];

const ANTARCTICA: &[LonLat] = &[
    (-180.0, -90.0), (180.0, -90.0), (180.0, -78.0), (170.0, -72.0), (160.0, -70.0),
    (150.0, -68.5), (140.0, -66.5), (120.0, -66.8), (100.0, -66.0), (85.0, -67.0),
    (70.0, -68.0), (60.0, -67.0), (45.0, -67.5), (30.0, -69.5), (15.0, -70.0),
    (0.0, -70.2), (-15.0, -72.5), (-30.0, -77.0), (-45.0, -78.0), (-60.0, -73.0),
    (-62.0, -65.0), (-57.0, -63.5), (-60.0, -65.0), (-65.0, -68.0), (-75.0, -72.0),
    (-90.0, -73.0), (-105.0, -74.0), (-120.0, -74.0), (-140.0, -76.0), (-155.0, -78.0),
    (-170.0, -78.0), (-180.0, -78.0),
];

const CASPIAN_SEA: &[LonLat] = &[
    (46.8, 44.5), (47.5, 43.0), (48.6, 41.8), (49.5, 40.3), (49.0, 38.3),
    (50.3, 37.2), (53.0, 36.9), (53.9, 37.3), (53.1, 39.5), (52.7, 41.0),
    (52.9, 42.6), (51.3, 43.1), (50.3, 44.6), (51.3, 45.3), (53.1, 45.3),
    (51.7, 46.9), (49.2, 46.5), (48.0, 46.0),
];

const LAKE_SUPERIOR: &[LonLat] = &[
    (-92.0, 46.7), (-89.0, 48.0), (-86.0, 48.8), (-84.8, 47.0), (-87.0, 46.5),
    (-90.5, 46.5),
];

const LAKE_MICHIGAN: &[LonLat] = &[
    (-87.8, 42.0), (-87.5, 44.5), (-85.5, 46.0), (-84.8, 45.8), (-86.2, 43.6),
    (-86.5, 42.2),
];

const LAKE_HURON: &[LonLat] = &[
    (-84.5, 45.9), (-81.5, 46.0), (-80.0, 45.0), (-81.7, 43.3), (-82.5, 43.0),
    (-83.5, 44.0), (-84.0, 45.5),
];

const LAKE_ERIE: &[LonLat] = &[
    (-83.4, 41.7), (-81.5, 42.8), (-79.0, 42.9), (-79.8, 42.1), (-81.6, 41.5),
];

const LAKE_ONTARIO: &[LonLat] = &[
    (-79.8, 43.3), (-76.5, 44.2), (-76.2, 43.5), (-78.5, 43.4),
];

const LAKE_VICTORIA: &[LonLat] = &[
    (31.6, -0.3), (33.0, 0.3), (34.0, -0.3), (34.2, -1.5), (33.2, -2.6),
    (31.8, -2.2), (31.6, -1.0),
];

const LAKE_TANGANYIKA: &[LonLat] = &[
    (29.2, -3.3), (29.6, -6.3), (30.6, -8.6), (31.1, -8.4), (30.3, -6.0), (29.5, -3.4),
];

const LAKE_BAIKAL: &[LonLat] = &[
    (103.8, 51.5), (105.5, 51.6), (108.0, 53.0), (109.5, 55.7), (108.8, 55.8),
    (107.2, 53.2), (104.3, 51.9),
];

const NILE: &[LonLat] = &[
    (31.0, 31.4), (31.2, 30.0), (30.8, 27.5), (32.7, 25.5), (32.9, 24.0),
    (31.4, 21.8), (30.5, 19.6), (31.8, 18.3), (32.5, 15.6), (32.6, 13.0),
    (31.6, 10.0), (31.5, 7.0), (31.6, 4.5), (32.3, 2.0), (33.0, 0.4),
];

const AMAZON: &[LonLat] = &[
    (-50.0, -0.3), (-52.0, -1.5), (-55.0, -2.0), (-58.0, -3.0), (-60.0, -3.2),
    (-63.0, -3.8), (-66.0, -3.0), (-69.0, -3.6), (-71.5, -4.3), (-73.4, -4.5),
];

const MISSISSIPPI: &[LonLat] = &[
    (-89.3, 29.2), (-90.0, 30.0), (-91.2, 31.5), (-91.1, 33.5), (-90.1, 35.1),
    (-89.5, 37.0), (-90.2, 38.6), (-91.4, 40.4), (-91.0, 42.5), (-92.5, 44.5),
    (-94.2, 46.5), (-95.2, 47.2),
];

const MACKENZIE: &[LonLat] = &[
    (-135.0, 69.0), (-133.0, 68.0), (-128.0, 65.3), (-123.0, 64.5), (-120.5, 62.5),
    (-117.5, 61.3),
];

const VOLGA: &[LonLat] = &[
    (47.8, 46.0), (48.0, 46.5), (44.5, 48.7), (46.0, 50.5), (48.5, 53.3),
    (49.2, 55.8), (45.0, 56.3), (40.0, 57.6), (36.0, 57.0),
];

const DANUBE: &[LonLat] = &[
    (29.6, 45.2), (28.0, 45.3), (25.0, 43.7), (22.5, 44.0), (20.5, 44.8),
    (19.0, 45.8), (18.9, 47.8), (17.0, 48.1), (16.4, 48.2), (13.5, 48.5),
    (12.0, 49.0), (9.0, 48.0), (8.2, 47.9),
];

const CONGO: &[LonLat] = &[
    (12.4, -6.0), (13.5, -5.8), (15.3, -4.3), (16.5, -2.0), (17.8, 0.0),
    (20.0, 1.5), (22.5, 2.1), (24.5, 0.5), (25.2, -0.3), (26.0, -4.0),
    (27.0, -7.0), (27.5, -8.5),
];

const GANGES: &[LonLat] = &[
    (90.5, 22.5), (88.3, 24.5), (85.5, 25.5), (83.0, 25.3), (80.3, 26.5), (78.2, 29.9),
];

const YANGTZE: &[LonLat] = &[
    (121.5, 31.5), (118.8, 32.0), (117.0, 30.5), (114.3, 30.6), (112.0, 30.3),
    (109.5, 31.0), (106.5, 29.6), (104.6, 28.8), (101.5, 26.6), (99.3, 27.5),
    (98.5, 30.0), (96.0, 33.0),
];

const MURRAY: &[LonLat] = &[
    (139.3, -35.5), (140.0, -34.0), (142.0, -34.2), (144.0, -35.3), (147.0, -36.0),
];

const HIMALAYA: &[LonLat] = &[
    (73.0, 35.5), (75.0, 34.0), (78.0, 32.0), (81.0, 30.0), (84.0, 28.5),
    (88.0, 27.2), (92.0, 27.5), (95.0, 28.5), (96.0, 29.5), (92.0, 29.5),
    (88.0, 28.8), (84.0, 29.8), (80.0, 31.8), (77.0, 34.0), (75.0, 36.5),
];

const ANDES: &[LonLat] = &[
    (-78.0, 2.0), (-77.0, -2.0), (-75.0, -10.0), (-70.0, -16.0), (-68.0, -22.0),
    (-69.0, -30.0), (-71.0, -38.0), (-73.0, -46.0), (-72.0, -50.0), (-70.5, -50.0),
    (-70.5, -42.0), (-69.5, -33.0), (-66.5, -23.0), (-66.5, -17.0), (-71.5, -13.0),
    (-75.0, -6.0), (-75.5, 0.0), (-76.5, 3.0),
];

const ROCKIES: &[LonLat] = &[
    (-123.5, 58.0), (-119.0, 53.5), (-114.5, 49.0), (-112.0, 45.0), (-108.0, 41.0),
    (-105.5, 37.0), (-104.5, 34.0), (-107.0, 34.0), (-109.5, 38.5), (-112.5, 42.0),
    (-115.5, 46.0), (-119.0, 50.0), (-124.0, 54.0), (-127.0, 57.5),
];

const ALPS: &[LonLat] = &[
    (5.5, 44.0), (7.0, 46.0), (10.0, 47.3), (13.0, 47.7), (16.0, 47.8),
    (15.5, 46.5), (13.0, 46.2), (10.0, 45.9), (8.0, 45.2), (7.2, 43.9),
];

const CAUCASUS: &[LonLat] = &[
    (37.5, 44.5), (40.0, 43.8), (44.0, 42.9), (47.0, 41.7), (49.5, 40.5),
    (48.5, 40.3), (45.0, 41.3), (41.5, 42.3), (39.0, 43.3),
];

const ATLAS: &[LonLat] = &[
    (-9.5, 30.5), (-5.0, 32.0), (-1.0, 33.5), (3.0, 35.0), (9.0, 36.0),
    (10.0, 35.0), (3.0, 34.0), (-2.0, 32.5), (-6.0, 31.0), (-9.0, 29.8),
];

const US_CANADA_BORDER: &[LonLat] = &[(-123.3, 49.0), (-95.2, 49.0)];

const US_MEXICO_BORDER: &[LonLat] = &[
    (-117.1, 32.5), (-114.8, 32.5), (-111.0, 31.3), (-108.2, 31.3), (-106.5, 31.8),
    (-104.5, 29.6), (-103.0, 29.0), (-101.4, 29.8), (-99.5, 27.5), (-97.2, 25.9),
];

fn polygon(exterior: &[LonLat]) -> Shape {
    Shape::Polygon(vec![exterior.to_vec()])
}

fn line(points: &[LonLat]) -> Shape {
    Shape::Line(points.to_vec())
}

/// Embedded shapes for one layer. Ocean is empty: the frame background is the ocean.
/// Coastline is empty here and traced from land by the caller.
pub(super) fn shapes(kind: LayerKind) -> Vec<Shape> {
    match kind {
        LayerKind::Land => {
            let mut land: Vec<Shape> = [
                NORTH_AMERICA, GREENLAND, BAFFIN_ISLAND, VICTORIA_ISLAND, ELLESMERE_ISLAND,
                CUBA, HISPANIOLA, SOUTH_AMERICA, AFRICA, MADAGASCAR, CHUKOTKA_EAST,
                GREAT_BRITAIN, IRELAND, ICELAND, SVALBARD, HONSHU, KYUSHU, HOKKAIDO,
                SRI_LANKA, LUZON, BORNEO, SUMATRA, JAVA, NEW_GUINEA, AUSTRALIA, TASMANIA,
                NEW_ZEALAND_NORTH, NEW_ZEALAND_SOUTH, ANTARCTICA,
            ]
            .iter()
            .map(|ring| polygon(ring))
            .collect();
            land.push(Shape::Polygon(vec![EURASIA.to_vec(), BLACK_SEA.to_vec()]));
            land
        }
        LayerKind::Ocean | LayerKind::Coastline => Vec::new(),
        LayerKind::Lakes => [
            CASPIAN_SEA, LAKE_SUPERIOR, LAKE_MICHIGAN, LAKE_HURON, LAKE_ERIE, LAKE_ONTARIO,
            LAKE_VICTORIA, LAKE_TANGANYIKA, LAKE_BAIKAL,
        ]
        .iter()
        .map(|ring| polygon(ring))
        .collect(),
        LayerKind::Rivers => [
            NILE, AMAZON, MISSISSIPPI, MACKENZIE, VOLGA, DANUBE, CONGO, GANGES, YANGTZE, MURRAY,
        ]
        .iter()
        .map(|points| line(points))
        .collect(),
        LayerKind::Mountains => [HIMALAYA, ANDES, ROCKIES, ALPS, CAUCASUS, ATLAS]
            .iter()
            .map(|ring| polygon(ring))
            .collect(),
        LayerKind::Borders => vec![line(US_CANADA_BORDER), line(US_MEXICO_BORDER)],
    }
}
