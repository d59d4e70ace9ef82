//! Trained parameters for the keyword-spotting (GSC) classifiers and the
//! linear readouts.
//!
//! Emitted from the trained networks; edit the network and re-export instead
//! of touching these tables by hand. Layouts are row-major:
//! conv kernels are `[filter][channel][tap]`, dense kernels `[unit][feature]`.

use crate::number::Number;

pub static CONV_BIAS_A: [Number; 64] = [
    77, 55, -70, 62, -43, 23, 120, 25, -79, 86, 53, -4, 96, 51, 27, 98,
    -6, 90, 102, -6, 102, 110, -41, 35, 91, -15, -20, -41, 169, -156, -63, 103,
    -89, 102, 16, 134, -67, -26, 98, 93, 19, 126, 109, 104, 120, -42, 84, 70,
    57, -56, -27, 87, -69, -42, 4, -48, 63, -118, -51, 53, -55, -53, 114, 77,
];

pub static CONV_KERNEL_A: [Number; 64 * 8] = [
    34, 26, -112, -182, -226, -137, -29, 99,
    -130, -151, -174, -223, -17, -94, -182, -156,
    -1, 24, 60, 17, 13, 72, 110, 4,
    49, 45, 58, 5, 58, 49, 21, 21,
    -141, 86, -111, 55, -36, -26, 160, 141,
    -16, 114, 131, 51, -151, -158, -189, -209,
    35, -142, 46, 38, -57, 13, 34, 8,
    45, 60, 61, -34, -28, -45, 20, 103,
    19, 73, -6, -46, 48, 4, 0, 32,
    -127, -41, -44, 5, -22, 99, 94, 152,
    9, 43, -23, 30, 21, 63, -31, 43,
    7, 70, -15, 28, 62, -31, -65, -28,
    43, -124, 6, 96, 64, -18, -100, 39,
    75, -124, -51, 21, 77, -45, 47, 38,
    36, 23, -43, 109, 87, 29, -88, -99,
    -128, 106, 54, -56, -60, -31, 46, 134,
    -50, -20, 40, 68, 27, 58, -9, 36,
    -98, -7, 75, 107, 31, -110, 64, 41,
    80, -96, -56, 60, -33, -28, 90, 2,
    -80, -8, -76, 31, 95, 11, 56, 38,
    57, -89, 14, 16, -42, 39, 54, -36,
    49, -86, -32, -2, 9, 58, 53, 27,
    10, -121, 3, 12, 56, 52, 0, 77,
    24, 80, 41, -63, 47, -17, 0, -39,
    -329, 35, -116, 27, -26, 40, 92, 111,
    -23, -51, 41, -20, 64, 94, 88, 117,
    15, 5, -36, 48, 64, 83, 69, -77,
    29, 79, -44, -3, 52, 43, -52, -44,
    22, 85, -41, -151, -128, -73, -11, 73,
    14, 17, 84, 44, 37, -55, 28, 136,
    -10, 15, -19, 99, 53, -42, 81, 33,
    19, -90, 71, 119, -8, -25, -116, -85,
    -26, -101, 163, 142, 11, -72, 133, -37,
    -30, -9, 97, -60, -55, -26, 63, 38,
    -137, -166, 31, -75, -130, -21, -120, -214,
    74, -151, -21, 21, 14, 37, 49, 29,
    -59, 27, -11, 40, 47, 39, 3, 43,
    27, -48, -74, 23, 32, 21, 85, 95,
    -319, 16, -119, 54, -30, 37, 61, 126,
    30, 10, -80, -92, -65, -20, 131, 168,
    -34, -75, -20, 57, 73, 60, 64, 103,
    -159, -21, -93, 94, 54, 7, 138, 115,
    7, 81, -147, -83, 30, 11, 73, 98,
    88, -114, -77, 75, -34, 30, 99, -12,
    29, -63, 76, -87, -112, 98, 45, 151,
    5, 27, 55, -6, -49, 77, 71, -88,
    42, 24, -64, 17, -26, 10, 2, 50,
    18, 74, -36, -65, 41, -9, -49, 4,
    35, 3, 23, 63, -33, 82, -32, 19,
    -16, -53, -7, 79, 53, 61, 20, 64,
    -80, -41, 41, 86, 103, 23, 19, 27,
    -15, -58, -172, -56, -55, -65, -86, -162,
    -16, 0, 29, -27, 21, 89, 61, 26,
    21, 8, 51, -45, -24, 151, 110, -112,
    47, -87, -52, 29, 12, 43, 100, 14,
    4, 0, 77, -60, -14, 59, 16, -28,
    0, 7, 77, 58, -53, -26, 28, -61,
    22, 71, -24, 25, 37, -32, -14, 80,
    -11, -28, -45, 130, 67, 47, 74, -44,
    -66, -191, 44, -1, -68, 17, -155, -151,
    -76, -5, 39, 82, 12, 42, 31, 77,
    65, 6, 104, 133, -163, -8, 152, -121,
    -92, -86, 65, -37, 49, 70, -31, 119,
    -178, 56, 149, -135, -7, -15, -48, 76,
];

pub static DENSE_BIAS_A: [Number; 1] = [-63];

pub static DENSE_KERNEL_A: [Number; 1664] = [
    -127, 24, 75, 89, -13, 40, 45, 14, -14, 73, 49, 52, 23, 13, -51, -176,
    -88, 103, 136, 155, 96, -111, -171, -278, -131, -53, -10, -44, -232, -19, 40, 14,
    -47, -12, -33, -51, -74, -7, 27, -20, -71, -160, -109, -110, 26, 39, 13, 49,
    -52, -152, -214, -195, 7, -26, -4, 10, 16, -23, 14, 21, 7, -26, -31, -23,
    -4, -8, -41, -57, 9, 9, -36, 26, 28, 0, 61, 14, -3, -1, 4, -30,
    -19, -41, -26, -23, -8, 0, -35, 9, -39, -35, 3, 23, -15, -55, -73, -44,
    -34, -1, -25, -5, -28, -10, -3, -28, 161, 201, 5, 68, 52, -56, -18, -44,
    -36, 36, 6, -20, -7, 11, -31, 58, 53, -67, -4, -39, -148, 124, 104, 22,
    26, -132, 162, 44, 10, 23, 128, 0, 68, 174, 147, 112, -11, 26, -2, -215,
    75, 157, 264, 221, -70, -134, -163, -200, -50, 109, 183, 73, 71, -111, -67, 92,
    -103, -137, -19, -20, -79, -39, 37, -184, -45, 38, 18, -32, -87, 10, -111, 17,
    -44, -64, -42, -92, -174, 23, -2, -21, -35, -21, -38, 9, 39, 29, -8, 21,
    7, 11, 42, -58, -59, -61, -21, 15, 14, 3, 26, 50, -22, -31, -24, -2,
    -10, 11, -15, 28, 8, 4, 7, 2, 0, 19, -20, -16, 13, 58, -9, 6,
    -18, 39, 47, -48, 14, 93, -21, 43, 60, -7, -110, 94, -7, -42, -5, 17,
    4, 67, 89, 57, 35, -54, -82, -23, -17, -7, -8, 15, -37, -62, -61, 0,
    154, 123, -7, -55, -16, 4, -39, -19, -16, 41, 0, -50, -7, 9, -50, -31,
    30, -11, -15, -8, -48, 1, 15, -43, -29, -8, -13, -9, 35, -11, -17, -10,
    23, -9, 46, 4, 13, -23, -10, 68, 0, -54, -39, 56, 62, 110, -12, -17,
    56, -67, -44, 10, -14, 21, 61, -38, 43, -87, 55, -19, 50, -36, 17, -25,
    -56, 7, 72, -28, 58, -80, 36, 52, 33, -60, -73, -12, -60, -67, -20, 2,
    -8, 58, 38, -60, 3, -77, -17, -122, 51, 38, 38, -43, 11, -54, 22, 30,
    23, -45, -5, 25, -42, 99, -29, 25, 62, -77, 32, 49, -22, -13, 69, 53,
    18, 18, -4, -40, -11, 52, -14, -15, -41, 20, 92, 69, -30, -65, 9, 18,
    -1, -9, -11, 10, 6, 35, 90, 76, -24, -21, 82, -75, -18, -75, -71, -49,
    -6, 41, 26, -66, -7, 28, -38, -6, -38, -20, 18, 25, -43, -109, -5, -111,
    -49, 34, 13, 19, -4, 13, 13, -29, 1, 67, 31, 24, 19, -47, -13, -50,
    -20, -2, 16, 2, 47, -10, -51, 1, 36, 48, -63, 55, -61, 32, -50, 33,
    -21, -25, 41, -6, 43, 46, 8, -53, -123, -2, -23, -5, -26, -7, -6, 5,
    -33, -75, 9, 18, 22, -63, -75, -48, -8, -113, 4, -9, 16, -89, 27, -53,
    -44, 23, 27, -72, 1, -11, -87, 125, 5, 5, 85, -136, -52, 85, -31, 84,
    14, 71, -42, 13, -4, -22, 53, 56, 68, -40, 4, -37, -59, 43, 22, 9,
    53, -21, -2, -7, 15, 22, 115, 63, 20, -51, -5, -42, 32, -62, -51, 4,
    -51, -39, -23, -26, -67, 12, 28, -60, -8, 29, -47, 87, -50, -48, 85, -15,
    -95, 47, 5, -70, 7, -79, 4, -54, 23, 39, 28, -6, -4, -20, 10, 13,
    -10, -75, -33, -36, -46, 68, -18, -4, 37, -20, -33, -27, 87, -34, 110, 15,
    -39, -49, 27, 48, 47, 24, -25, 34, 12, -75, 69, -7, 31, 57, 0, -21,
    -63, 1, 101, 73, 78, 127, -27, -34, -27, -10, -13, 6, 18, -28, 5, 27,
    -35, -51, 25, 56, 9, 6, -52, 37, 31, -62, -42, 11, -28, 13, -32, -27,
    12, 241, -185, -98, -6, 73, 99, 33, -8, 56, -10, -100, -97, -28, 64, 51,
    88, -100, 5, -64, -205, 85, 204, 87, -27, -158, 64, 29, 46, -9, -22, -2,
    -23, -2, 39, 5, 32, -2, -38, -76, -45, -11, 8, 45, -26, -13, -22, 38,
    16, 38, 28, 23, -21, -4, 24, 4, 5, 15, -22, 21, 50, 5, 4, -43,
    -47, 16, 34, -30, -3, -9, 22, 4, 1, -41, 43, 9, 17, 34, -13, 15,
    -5, 7, -40, 24, 25, -38, 14, 43, -1, -3, -18, 76, 83, 37, -66, -27,
    106, -58, -14, 36, 50, 56, 15, -36, -58, 41, 58, 53, -57, 49, 20, 24,
    7, 27, -29, 78, 92, 94, 33, 11, -35, 132, 201, 137, 3, -36, -119, -115,
    -95, -47, 34, -47, -27, 26, 20, 21, -26, 10, -46, -28, -2, 45, 2, -43,
    0, 47, -16, -20, -9, 54, 33, 78, 7, -51, 0, 4, -57, 2, -12, 47,
    0, -5, 32, 24, -5, -8, 45, 29, 51, -16, -60, -5, 19, -30, 61, 20,
    -13, 38, -1, -29, 68, 60, 71, -51, -73, 118, 9, 1, 5, -7, -121, -7,
    154, -75, -46, -10, -16, 182, 140, -76, -116, 11, -103, -126, -78, -76, -90, -5,
    -245, 10, -20, 3, -50, 26, -56, 34, 63, 24, -15, 71, 51, 96, -89, 26,
    108, -71, -25, 82, 59, -34, -19, -39, 20, 154, -72, 21, -4, -51, 37, 0,
    -69, -45, 0, -31, -59, 52, -2, -36, -30, -15, -52, 30, -59, -53, 23, -34,
    63, -48, -101, -42, -10, -5, -198, 26, 46, 11, -22, 27, -19, 1, -50, -6,
    22, -65, -75, -24, -129, -136, 2, -123, 20, 99, -167, -54, -73, -193, 49, -109,
    -16, -81, 17, -126, 58, 41, 0, -42, -20, -133, -61, 34, 86, -49, 10, 0,
    -110, 51, 4, -24, 63, -86, -54, 41, 15, 20, -33, 38, 1, -38, 34, -28,
    2, 3, 51, 26, 30, -24, 3, 1, -14, -1, 23, 10, 29, 26, -28, 15,
    40, 36, 13, -11, 9, 13, 2, -67, 40, 62, 70, -37, 3, 13, 34, -30,
    -6, 34, 55, 44, -17, 22, 2, 39, 75, -8, 115, -32, -27, 184, -134, -63,
    -68, 55, 70, 35, 63, 88, -12, -138, -84, -68, 81, 61, 63, 10, 48, -40,
    -168, 82, 192, 82, 52, -72, 12, -55, -27, 64, 5, 46, 101, 23, -39, -64,
    -70, -97, 35, 7, 24, 26, 24, -121, 15, 26, 51, 108, -43, -114, -146, -148,
    -79, 60, 33, -10, -18, -2, -20, 17, 60, 51, 5, 7, -42, -66, -44, -5,
    -15, 3, -7, -13, -24, 9, 48, 36, 95, 88, -154, 142, -51, 7, -44, 27,
    -30, 33, 93, 81, -11, -81, -96, -17, -74, 28, 9, -14, 37, -85, -122, 8,
    50, 120, 52, 13, -75, -6, -29, 22, -115, 16, 59, 45, -16, -28, -95, -60,
    27, 80, -24, 34, 28, -104, 83, 40, -24, 113, -48, 1, 3, -100, 13, -70,
    -44, -59, 66, -111, 37, 37, 23, -69, 13, -77, -69, 37, 4, -47, 39, -28,
    -59, 120, -47, -55, 81, -38, 14, 76, 15, -86, 47, -22, 5, -5, 51, 13,
    20, -54, -39, -31, 55, -54, 39, -39, -52, 62, -34, -54, 42, -24, 78, -30,
    -110, -62, -10, -41, 14, -26, 39, -2, 27, 19, 70, -31, -32, 6, 62, 81,
    0, -99, 52, 40, -68, -17, 18, 4, 96, 39, -51, 28, 0, -6, -43, 9,
    11, -11, -13, -14, -8, -4, -33, -34, 35, 6, 3, -44, -24, -62, 31, 28,
    -42, 6, -14, -74, -46, -60, -42, -25, 24, -19, -46, 14, -7, -9, -8, 74,
    -24, -51, 17, 51, -20, 26, -44, -15, 97, -37, -56, -2, -104, -52, 11, -73,
    -14, 2, -23, -18, 11, -1, -2, -24, -1, 0, -37, -37, -19, -53, 75, -54,
    25, -32, -64, -14, -13, -10, 18, -26, 2, 11, -56, 46, -13, 21, 23, 5,
    -12, 40, 44, 72, 46, -5, 31, -12, 2, 27, -27, 31, 13, 41, -16, -16,
    7, 2, 103, 97, -116, -10, 13, 78, 21, -4, 15, 17, 22, 109, 24, 9,
    22, -29, -24, 1, -59, -4, 39, 23, -8, -85, -60, 0, 77, 69, -138, -98,
    -18, -25, 11, -47, -44, -21, -19, -75, -34, 17, -3, -24, -163, -98, -56, -1,
    4, 93, 50, -21, -189, -245, -208, -200, 133, 39, 43, -12, 31, -21, -19, 11,
    36, 24, 26, 19, 7, -18, 36, -41, 35, 90, -9, -33, 26, 3, 38, 84,
    51, 34, -7, -10, 41, -58, 61, 7, -2, -5, 6, -14, -32, 14, -38, 89,
    25, -66, 8, 61, -62, 4, 30, 2, 40, 94, -64, 15, 27, -51, 25, -26,
    80, -96, 44, 59, 82, -63, 13, -37, -54, 29, 24, 2, 39, 50, -65, 67,
    23, -39, 122, 19, 62, 139, -28, -9, 33, -28, 27, -5, 10, -14, 29, 19,
    -30, 26, 48, 14, -25, -16, -4, 73, -6, -39, 10, 8, 13, 43, 8, 10,
    -3, -29, -40, -14, 31, 37, -58, 47, 0, -63, 18, 60, 3, 11, 24, -47,
    69, 67, -103, -1, -35, -43, 27, -32, -104, 37, 16, -31, -47, 43, 31, -2,
    38, 34, -47, 12, 0, 23, 14, 1, -33, 60, 30, -13, 110, -2, 14, 90,
    0, -6, 33, -22, -104, 27, 19, 34, 28, -6, 5, 15, -8, -5, 17, -17,
    0, -13, -12, -10, 44, -1, 29, -2, -7, -14, 40, -19, 63, 58, 0, -2,
    -168, 7, 71, -54, -76, 45, -62, 24, -41, -58, -18, -18, -38, -50, -98, -116,
    -37, -183, 87, 130, -3, -102, -98, -161, -56, 52, 21, 37, -36, 2, 19, -19,
    -17, 71, 54, 30, 54, -6, -34, 14, 33, -2, 40, 14, 67, 11, -44, 7,
    55, 45, 3, 18, -23, -46, 54, -23, -23, 73, 13, -56, 41, 60, 11, 27,
    0, -105, 139, -4, -111, 94, -6, -3, 124, -1, -79, 101, -127, -6, -2, -117,
    -83, 54, -91, 42, 5, 57, -15, -31, -82, -112, -5, 66, -21, 33, 26, -155,
    -10, 38, 39, 125, -16, -85, -123, 66, -48, -58, 106, -31, -64, -125, 73, -103,
    -30, 67, -75, 8, 87, 86, 53, -29, -10, -40, 47, -68, 103, -68, -51, -135,
];

pub static CONV_BIAS_B: [Number; 64] = [
    -69, 12, 76, -30, 9, 108, 71, -22, 58, -40, -25, 37, -23, 65, 3, 32,
    43, 33, -28, 12, 16, 5, 35, -30, 15, 12, -10, 89, -20, 54, -14, 35,
    -19, 96, -68, 49, 55, 32, -23, -16, -2, 36, -22, -53, 109, 37, -2, 53,
    12, 35, 15, 55, 18, 16, 50, 68, 11, 46, 34, 49, -3, 36, -31, 112,
];

pub static CONV_KERNEL_B: [Number; 64 * 8] = [
    19, 59, 44, -15, -27, 14, -34, -5,
    -34, -75, 61, -56, 43, 38, 13, 62,
    -141, -157, 57, 133, -168, -5, 82, 32,
    -66, 80, 13, 68, -40, -38, 72, -5,
    13, 30, 15, 4, -49, -15, -35, -43,
    -101, 14, 42, -96, 1, 37, 27, -75,
    -45, -56, -95, 8, 13, 20, 10, -146,
    64, -44, -53, 27, 72, -75, 50, 63,
    14, -171, 2, -21, 45, -37, -1, 53,
    3, 19, 67, 2, 17, -47, 22, 25,
    16, 50, 56, 13, -64, 37, 63, -1,
    -44, 58, 6, 47, -38, 42, 48, 16,
    55, 21, 15, -34, 38, 22, -52, -17,
    -42, 1, 36, 30, 55, -62, 47, -6,
    -117, 26, -86, 51, 58, 1, 14, 113,
    -105, 100, 115, -66, 9, -120, -123, -67,
    -69, 10, 19, 44, -32, -8, 87, 60,
    30, -4, 34, -19, 57, 17, -78, -39,
    50, 15, -48, 14, 38, -45, -33, 51,
    -41, 18, -2, 42, 35, 18, 27, 6,
    -28, 83, -94, -36, 33, 83, -14, -11,
    5, 29, -1, -50, -26, 4, 19, 44,
    50, -89, -65, -9, 21, 53, -23, 25,
    39, -49, 8, 85, -46, 36, 33, -61,
    20, -65, 34, 24, -82, 8, -8, -143,
    -70, -73, -28, -91, -58, -12, -116, -72,
    9, -22, 89, -63, -53, 49, 42, -24,
    43, -23, 81, -35, 30, 75, -145, -134,
    -27, 23, 61, 41, -16, -27, 55, -49,
    -23, -22, -68, 10, 73, 16, -4, 77,
    -86, -65, -131, 0, -23, 6, -50, -71,
    11, -152, 0, -51, 14, -31, -150, 29,
    -103, 5, -48, 38, 51, 34, -26, 92,
    -43, -102, -106, -52, 20, 59, 2, 58,
    7, -53, 40, -15, -37, 52, 54, 31,
    47, -48, -70, 37, 12, 31, 44, 33,
    -27, -68, 8, 93, 21, 63, 8, 92,
    -120, -24, 82, 10, -36, -57, 102, 33,
    24, -14, 30, 21, -17, -40, 51, 3,
    -45, 18, -47, -1, 43, 52, 56, 32,
    21, 67, 30, -16, -39, 57, -69, -6,
    -46, 20, 0, 48, -42, -3, 52, 80,
    -40, -58, 30, 45, 36, 62, -43, 0,
    -70, 8, -56, 46, 40, 53, 28, 25,
    17, 77, -102, -104, -5, 8, -72, 14,
    15, 23, -7, 25, 36, 62, -56, -64,
    -39, -41, 0, 44, 12, 51, 76, -9,
    22, -21, -114, -22, -81, -71, -104, 91,
    45, -63, -45, 13, 59, 23, 63, 31,
    14, 69, -23, -57, 56, -9, 19, -59,
    -68, 66, 92, -51, -39, -165, -113, -44,
    32, -36, 47, -85, -74, -11, 30, 33,
    47, 12, 14, 14, -26, 56, 7, -23,
    54, 66, -47, -13, 63, -85, 22, 11,
    24, -129, 50, 57, -72, -23, 71, -79,
    32, 87, -40, -19, 19, -54, -39, -69,
    53, -76, 31, 46, -60, 29, 19, -12,
    2, 70, -86, -46, 28, 1, 4, 35,
    -15, -64, 56, -40, 37, 6, 71, -50,
    52, -70, -20, 3, 26, -9, 10, -61,
    5, 58, -68, -86, 10, 41, 26, 77,
    34, 60, -23, 5, 45, -48, 0, 20,
    -15, -97, 45, 84, 106, -24, 54, -20,
    19, -80, 34, 50, -26, -10, -92, -94,
];

pub static DENSE_BIAS_B: [Number; 1] = [-29];

pub static DENSE_KERNEL_B: [Number; 1664] = [
    -22, -8, 1, -41, -24, 40, 41, 24, 20, 1, -39, -4, -15, 14, 0, 0,
    -19, 45, 16, -8, 9, 39, 3, -2, 26, 28, -73, -21, 67, -58, -39, 11,
    -6, -17, 19, 22, -20, -39, -30, -60, 33, 33, -14, 37, 1, -48, -5, 40,
    57, 148, -13, -35, -64, 25, -16, 32, -128, 49, -38, 29, -62, 24, 27, -78,
    -26, 89, 54, 40, -68, -47, 71, -135, -140, 117, 100, 28, -77, 11, 66, 38,
    -13, 11, -17, -12, 5, -12, -20, -34, 24, 28, 19, 17, -10, -1, 50, -35,
    -25, -6, 14, 64, 12, 7, -28, 56, -24, 5, 20, 17, -15, -11, 30, 10,
    58, 63, 10, 35, 19, -53, 26, 33, 51, 103, 45, -58, -119, -109, 17, 23,
    0, 65, -9, 31, -65, -44, 66, -38, 27, -33, 56, -32, -23, 52, -82, -73,
    33, 10, 27, -81, 18, 32, 55, -57, 31, 73, -90, -48, 1, -31, -81, -9,
    -27, -37, 61, -15, 39, 35, -60, 62, -1, -58, -25, -41, -40, -30, -76, 66,
    93, 82, -56, 24, -80, -161, 3, -16, -24, -30, 13, -30, 12, 37, 7, -10,
    19, -17, 11, 12, -2, 1, -20, -21, 16, 69, 8, 39, 19, -46, 71, 42,
    70, -118, -25, -6, 53, 10, 0, -46, 44, -45, -30, -80, 0, 99, 2, 24,
    -99, 55, -21, -127, 84, 118, 64, -76, -118, 49, -11, -1, -6, -8, -5, 1,
    -3, 18, 7, -29, 26, 28, 24, -20, -42, 16, 16, -25, -39, 6, 35, 26,
    12, 0, 12, -6, -20, 19, -17, 12, 10, -20, 16, 24, -16, 9, -28, -10,
    43, 4, -13, -23, 18, -2, -35, 14, 11, -22, 34, -12, -38, 25, 20, 1,
    2, -3, -12, 19, -9, -40, 11, 3, -13, 1, 26, -25, -43, -45, -14, 19,
    -18, -9, 16, -5, 11, -1, -14, 5, 16, 14, 6, -33, -7, 23, 15, 13,
    -26, 44, -13, -8, 7, 25, 43, 6, -55, -11, 37, -40, -15, 11, -14, 37,
    -15, -11, -24, 34, 10, 2, -5, 15, 11, 8, 28, 16, 16, -8, -26, -28,
    -69, 32, -11, -50, -29, -29, 10, 7, -17, -46, 28, 6, -20, 103, -79, -5,
    22, -38, 0, 3, 4, 43, 7, -70, 8, -84, -10, 42, -37, 22, 33, -55,
    -74, -35, 10, 30, 145, 41, 145, -41, -24, -80, 107, 3, -42, 23, 104, -132,
    5, 13, -36, -12, -3, 11, 130, 10, -96, -30, -89, -108, 76, -56, 106, 21,
    -3, 38, -6, 30, 20, 16, -15, 6, 14, 29, -7, 26, -26, -30, -53, -18,
    28, -10, -5, -30, -19, -16, 10, -6, -14, -22, 22, 10, 16, -27, 26, -2,
    -18, -45, 6, 21, 26, -15, -38, -20, -2, 29, -7, -34, -25, -20, -40, -4,
    0, 45, 1, -50, -21, 15, 18, 15, 1, -50, 11, 18, 10, 16, 30, 0,
    -35, -7, 24, 0, 3, -67, 33, 12, 4, 35, -5, -7, -8, 49, -17, 1,
    7, 11, -28, -29, -15, -31, 14, 21, 18, -7, -28, -26, 9, 19, 15, -23,
    -10, 18, 20, -4, -7, -7, 8, 14, 92, 69, -3, 10, -76, 16, -26, -10,
    5, -47, 31, 13, -13, 32, -62, -3, 29, 6, 15, -15, -64, 25, -3, 20,
    72, -120, -18, -25, -5, 8, -20, 19, -5, -6, -33, 13, 17, -25, 39, 7,
    15, 21, 11, -24, 29, 11, -5, 2, 28, 38, 7, -55, 17, 12, 38, -34,
    -7, -10, -26, 56, -22, -4, 14, -22, -30, -4, 87, -43, -5, 56, -149, 69,
    -15, 42, -7, -86, -1, -77, -10, -10, 17, 26, 23, -21, -33, -5, -11, -38,
    7, 35, -38, 57, -23, -8, 19, -17, -27, 38, 24, -19, 56, 56, 6, 56,
    34, 14, -31, 8, 33, 6, -39, 79, -49, 16, -9, 28, 23, -47, 4, 20,
    -68, -3, 66, -88, -36, 12, -129, 110, 17, -35, 15, -33, -129, -4, 16, 3,
    -3, -16, -9, -35, -34, -43, -28, -9, -80, -42, -30, -57, 0, 10, 26, 32,
    -84, -129, -47, -61, -9, -28, 21, -58, -25, -7, 10, -41, -21, -12, -13, 6,
    96, 4, -9, 0, 10, 86, 2, -12, 50, -46, 42, 61, -45, 3, -5, 72,
    0, 16, 16, -18, -68, -10, 36, 47, -13, -53, 99, -61, 99, 71, 0, 0,
    -161, -105, -53, -53, -24, 92, -23, -78, 22, -1, 22, 23, 38, 34, -39, 29,
    20, -36, 25, 30, 45, -5, 3, -27, 55, -22, -18, 1, -6, -17, 13, 0,
    7, 78, -19, 58, -16, -36, -55, -16, -13, 3, 72, -17, 4, -42, 10, -47,
    3, 3, 19, -17, 62, -61, -35, 39, -24, 0, 104, -1, 23, 5, -64, -46,
    21, 5, 24, -4, 23, -3, -12, -11, -41, -49, -49, -110, -72, -97, -104, 8,
    28, 54, -132, -81, -72, -101, 75, -33, -36, 20, 63, -13, -68, -57, 57, -40,
    0, -73, 3, 8, -4, -4, -46, -39, -8, -56, 108, 66, 24, -103, -154, -55,
    -92, 68, -39, 0, 5, 17, -14, -12, 15, 27, 39, -26, 23, -62, 35, 51,
    -25, -16, 16, -41, -86, -32, 38, 64, 68, 20, 18, -1, -76, -49, 28, 41,
    6, 20, 59, -29, -42, -22, 20, 24, -13, -10, 3, 21, -33, -13, 21, 61,
    72, 31, 28, -73, 38, -23, 39, 10, -37, 32, -6, -12, -8, 20, 20, -30,
    18, 8, 20, 21, 32, 70, -39, -4, -16, 7, 47, -5, -17, -1, 20, -10,
    -38, -16, 2, -52, 3, 21, 38, -43, 12, -27, -13, -6, 5, -42, -3, -40,
    -53, 25, -7, -4, 45, -41, 50, 33, -110, 16, 33, 13, -15, -32, -6, 42,
    24, 20, 6, 11, -4, -62, -4, -10, 23, 9, -28, -29, 6, 35, -7, -19,
    0, 16, -94, 65, -29, 51, -49, -13, -45, -38, 5, 0, -13, -13, -33, -14,
    2, 28, 22, -85, -24, -80, -100, -51, 75, 38, -70, -60, -4, -15, -7, -23,
    24, -10, -11, 41, -2, -27, 6, -6, 23, -7, -8, -13, 60, 5, -24, 16,
    29, 0, 38, -31, -36, 48, 34, 29, -22, 14, 5, 12, -1, 27, 22, 30,
    24, 12, -10, 19, 5, 31, 17, -6, 52, 22, -22, 26, 32, 58, 27, -3,
    -28, -14, 19, -26, -6, -10, 49, 13, 13, 24, -33, 5, 22, 16, 35, 15,
    5, 44, -2, -62, 25, 20, -27, 50, -30, -34, 33, 48, -25, -12, 38, 11,
    -17, -2, -31, 11, 8, -19, -8, -29, -3, -19, 16, -36, 0, -8, -28, 27,
    25, -20, 0, -9, -29, 10, 34, 17, 26, -11, 25, 2, 8, 68, 16, 11,
    29, -4, 47, -49, 18, 38, 20, -15, -16, -27, 0, 44, -7, -6, -63, 64,
    -30, 55, 25, 11, -15, 29, 16, 5, 30, 13, 18, -7, -4, 22, 12, 13,
    20, 22, -59, -32, 21, 33, 31, 28, -62, 53, 45, 17, -27, 11, -41, 4,
    14, 41, -19, 4, 40, 120, -39, 12, 73, -87, 134, 91, 5, -24, -197, -63,
    -10, -55, -25, 13, 21, 27, 11, -3, 14, -36, -27, 26, -34, -22, -25, 16,
    4, -22, -5, -26, 20, 0, 10, -41, -24, -8, -17, -31, -47, 5, 40, 29,
    3, 5, -8, 29, 54, 40, -5, -43, -37, 41, -34, 8, 35, 17, 31, 26,
    -7, 1, 7, 40, 21, 65, -50, -23, 78, 1, 61, -34, 22, -6, 40, 20,
    -21, -9, 34, -22, -2, -76, 40, 58, 12, 104, 128, 46, 32, -139, -36, 28,
    5, -1, -6, -19, -9, -37, 26, 18, 41, -37, 0, -30, 12, 4, -16, 22,
    12, 17, -8, 19, -28, -47, 36, 25, 38, -4, -20, -11, 34, 23, -22, -13,
    6, 18, 12, -46, 12, -48, -15, 112, 8, -4, -88, -35, 56, -28, -44, 21,
    -5, -64, -14, -21, 114, -13, 32, -63, 44, 21, 25, -5, 94, -102, 27, 43,
    -45, -25, -21, 10, 99, 97, -22, -36, -90, -31, -6, -21, 131, 28, 16, 21,
    14, -15, -16, 8, 4, 11, -11, -41, -16, 4, 49, -28, 16, 35, -172, 84,
    42, 71, -13, -85, 18, -97, -87, -63, -9, 29, -5, -40, -30, 3, -22, 5,
    -15, -26, -5, -17, 10, 29, -10, -52, -30, -22, -53, 12, -25, -22, 1, 34,
    -3, 19, 18, -15, -7, 7, -3, -22, 13, 1, -32, -5, 1, -35, 25, 25,
    -30, 30, -39, -10, 40, 18, -50, 8, 40, -63, 50, -3, 37, -77, -48, 66,
    -88, -21, -42, 57, -100, -12, 36, -12, 32, 86, -137, 8, -20, -13, 16, 68,
    13, 26, -40, 74, -47, 89, -8, 22, 34, -14, -62, -27, -31, -26, 37, 99,
    34, 0, 12, 81, 21, 42, -24, 42, 35, -87, -145, -36, 16, -29, 29, 24,
    20, -26, 9, 26, -27, -36, -25, 15, -7, -23, 13, 11, 14, 36, 32, 2,
    9, 27, -53, 61, 16, -23, 30, 5, -23, 76, -44, -28, -24, 24, -84, 10,
    -13, -9, -20, -18, -30, -16, 11, 75, -12, 12, 20, -55, 90, 11, -56, 33,
    -60, -32, 0, -71, -68, -58, 11, -69, -51, 17, -16, -40, 6, 46, -25, 7,
    -22, -5, -54, -13, -4, -23, -46, -40, 19, -43, -30, 64, -101, 45, 25, 14,
    2, -15, 39, -79, 48, -32, -57, 2, 29, 2, -16, 58, 109, 46, -34, 78,
    -64, 102, -31, -62, 40, -9, 4, -66, -25, -5, 19, 9, -29, 0, 7, 58,
    -46, -16, -8, -22, 12, 8, 11, 18, 56, -21, 31, 11, -26, 63, -55, 57,
    -37, -78, -19, -30, 1, 30, -13, -29, 3, -15, -2, 8, -16, -26, -19, 2,
    -33, -6, -3, -49, 35, -30, -4, -5, -9, -28, 18, -11, -148, -22, 45, -16,
    -57, 19, 8, 4, 5, 51, 8, -19, 35, 48, -68, 44, 8, -3, 9, 57,
    20, -58, 14, -30, 20, 60, 59, 68, -75, 74, 25, -34, -10, 103, -143, -22,
    53, -19, 40, -61, -18, 142, 114, 15, 54, -11, -54, -17, -135, 39, -35, -68,
];

pub static BASELINE_BIAS: [Number; 1] = [37];

pub static BASELINE_KERNEL: [Number; 100] = [
    -20, -59, -54, 65, 60, 33, 105, -70, -75, 9,
    24, 48, -108, 48, 85, 77, 52, 73, -73, -42,
    -79, -22, -56, -34, -91, 34, 198, -19, -61, 97,
    55, 74, 0, -3, 37, 2, 22, -100, -53, -118,
    63, -101, -96, -74, -43, 71, -122, -40, -26, 65,
    44, 43, -65, -22, -14, -41, 46, 23, -133, -71,
    -13, 139, -139, -15, -96, -171, -85, -121, 29, 96,
    -81, 6, -35, 42, -200, -36, -118, -132, -72, 6,
    0, -20, 95, 10, 0, -57, -33, 96, -153, -73,
    -88, -109, -32, -41, -52, -12, 106, 58, 209, -63,
];

pub static READOUT8_BIAS: [Number; 1] = [-74];

pub static READOUT8_KERNEL: [Number; 8] = [397, -235, -129, 139, -228, -341, -88, -114];
