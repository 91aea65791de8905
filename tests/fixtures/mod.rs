//! Seeded chain data and reference amplitudes for the contraction tests.
//!
//! Chains are given as sparse `(offset, value)` lists into a zeroed buffer;
//! expected amplitudes come from an independent einsum contraction of the
//! same blocks.

/// Three qubits, `chi = 4`; `einsum('ij,jkl,lm->ikm', ...)`.
pub const WF3_CHAIN: &[(usize, f64)] = &[
    (0, -0.6622649924853867),
    (1, -0.3110490936135273),
    (2, 0.681488760344724),
    (3, -0.015052443773988289),
    (8, -0.537553225765131),
    (9, 0.4191539781192369),
    (10, -0.31650636199260096),
    (11, 0.659674338467379),
    (16, -0.21720151603221893),
    (17, 0.5354822278022766),
    (18, -0.24278810620307922),
    (19, 0.12074445933103561),
    (24, -0.10164494812488556),
    (25, -0.6021595597267151),
    (26, 0.49309641122817993),
    (27, 0.05576712265610695),
    (32, -0.3956003189086914),
    (33, -0.1778077632188797),
    (34, -0.1472112536430359),
    (35, 0.7757846117019653),
    (40, 0.3030144274234772),
    (41, -0.11498478055000305),
    (42, 0.06491414457559586),
    (43, -0.22911544144153595),
    (80, 0.5297775864601135),
    (81, 0.0),
    (82, -0.6799570918083191),
    (83, 0.41853320598602295),
    (84, -0.23835298418998718),
    (85, 0.0),
    (86, -0.13468137383460999),
    (87, 0.0829002782702446),
];

pub const WF3_AMPLITUDES: [f64; 16] = [
    -0.005946025252342224,
    -0.3386073410511017,
    0.08402486890554428,
    0.2276899814605713,
    0.10889682918787003,
    0.26689958572387695,
    -0.13812999427318573,
    -0.17624962329864502,
    0.16325148940086365,
    -0.18776941299438477,
    0.24669288098812103,
    0.48989138007164,
    0.18966005742549896,
    0.204482764005661,
    -0.41462600231170654,
    -0.28409692645072937,
];

/// Five qubits, `chi = 4`; `einsum('ij,jkl,lmn,nop,pq->ikmoq', ...)`.
pub const WF5_CHAIN: &[(usize, f64)] = &[
    (0, -0.7942508170779394),
    (1, -0.08353012422743371),
    (2, -0.5956724071158231),
    (3, -0.0858062557546432),
    (8, 0.6008886732655473),
    (9, -0.03348407052200576),
    (10, -0.7985104374257858),
    (11, 0.013883241380578323),
    (16, -0.31778309393577153),
    (17, 0.08129081012436856),
    (18, -0.17084936092778547),
    (19, -0.02218120545861387),
    (20, -0.4708915300196999),
    (21, 0.5554105084817618),
    (22, 0.4771044130233731),
    (23, 0.3238455071330493),
    (24, -0.255477406163936),
    (25, 0.4374921994586982),
    (26, -0.5501925628308599),
    (27, 0.16130434535302918),
    (28, -0.22510697789781603),
    (29, 0.05157889931677101),
    (30, -0.5462643594366281),
    (31, -0.2507242261622358),
    (32, -0.257977790582352),
    (33, -0.11224285788942705),
    (34, -0.29538188714282193),
    (35, -0.38072576149146387),
    (36, 0.6001487220096956),
    (37, 0.1913733701851922),
    (38, -0.23636184929019038),
    (39, 0.4857749031783798),
    (40, 0.10130150715330866),
    (41, -0.7391377306145324),
    (42, -0.44876238752931974),
    (43, 0.4560672064449336),
    (44, 0.028438967271747218),
    (45, 0.13724346784210212),
    (46, 0.003584017578785237),
    (47, -0.11987932710918753),
    (80, 0.40840303886247986),
    (81, 0.0),
    (82, 0.07592798473660406),
    (83, 0.7192043122227202),
    (84, -0.1351739336607331),
    (85, 0.31415911338868924),
    (86, -0.2543437131216091),
    (87, 0.1901822451454096),
    (88, -0.49494962111198254),
    (89, 0.3938336604677486),
    (90, 0.12794790638132017),
    (91, 0.23588305655979178),
    (92, -0.08352038306191087),
    (93, 0.4006572203199725),
    (94, 0.36886860844013736),
    (95, -0.1586842041599526),
    (96, 0.1834561393756626),
    (97, 0.0),
    (98, 0.19628042396288672),
    (99, -0.40233821643752055),
    (100, -0.5974332727264484),
    (101, 0.19287040617030263),
    (102, 0.1053276514717207),
    (103, 0.016804190083581708),
    (104, -0.263327065774291),
    (105, 0.43922624365712193),
    (106, 0.10968978610217328),
    (107, -0.19665026336865873),
    (108, -0.06004766570619344),
    (109, -0.028059745847255218),
    (110, -0.24855708157570078),
    (111, 0.5751767140835897),
    (112, 0.25199694912392945),
    (113, 0.0),
    (114, -0.05739258827501658),
    (115, -0.30245742194728265),
    (116, 0.13607116127541907),
    (117, 0.17118330269631235),
    (118, -0.22592603732824876),
    (119, 0.27239431845297707),
    (120, 0.01047777976886481),
    (121, -0.21390579587098454),
    (122, 0.020345493365053653),
    (123, -0.15489716040222756),
    (124, -0.2920457586238394),
    (125, 0.32807225065061896),
    (126, -0.22441139544567443),
    (127, -0.15516902178850114),
    (128, 0.1303815766294433),
    (129, 0.0),
    (130, 0.09443469130980126),
    (131, 0.09749552478738743),
    (132, 0.07115934313302229),
    (133, 0.07172860752123576),
    (134, 0.35262084813015576),
    (135, 0.05559150244274026),
    (136, 0.05585983377252125),
    (137, -0.08787607283694769),
    (138, -0.02888091663074432),
    (139, 0.12419549395557358),
    (140, -0.24857309811183348),
    (141, -0.06536920925603362),
    (142, -0.026777844823335055),
    (143, 0.07798739264017497),
    (144, -0.4022885859012604),
    (145, 0.529089629650116),
    (146, 0.021047838032245636),
    (147, 0.11089000850915909),
    (152, -0.11812450736761093),
    (153, -0.3155742883682251),
    (154, -0.025639047846198082),
    (155, 0.5808156132698059),
    (160, 0.0904598981142044),
    (161, -0.03687569126486778),
    (162, 0.4893633723258972),
    (163, 0.2733270823955536),
    (168, 0.2756871283054352),
    (169, -0.2685239017009735),
    (170, 0.0703665167093277),
    (171, -0.11739754676818848),
    (176, -0.040402818471193314),
    (177, 0.024999519810080528),
    (178, 0.2142343968153),
    (179, 0.3487721085548401),
    (184, -0.38712623715400696),
    (185, 0.2719499170780182),
    (186, -0.28398218750953674),
    (187, -0.12957964837551117),
    (192, -0.16253285109996796),
    (193, 0.1666962057352066),
    (194, 0.029656991362571716),
    (195, -0.07687799632549286),
    (200, 0.05283937603235245),
    (201, 0.06291946768760681),
    (202, 0.01979890652000904),
    (203, -0.21019403636455536),
    (208, -0.7146716713905334),
    (209, 0.0),
    (210, 0.3957919478416443),
    (211, -0.1956116110086441),
    (212, -0.28512677550315857),
    (213, 0.0),
    (214, -0.41377660632133484),
    (215, 0.20450012385845184),
];

pub const WF5_AMPLITUDES: [f64; 64] = [
    0.0027854256331920624,
    -0.14140120148658752,
    0.030212486162781715,
    0.05706779286265373,
    -0.09160802513360977,
    -0.05029388517141342,
    -0.06708981841802597,
    -0.06412483751773834,
    -0.0774611234664917,
    0.27072837948799133,
    -0.003501715138554573,
    -0.2887609601020813,
    0.016577117145061493,
    0.1369006335735321,
    0.08254759013652802,
    0.20499306917190552,
    0.17876368761062622,
    -0.02268427424132824,
    0.05583261698484421,
    0.10677587240934372,
    0.018177300691604614,
    0.26146093010902405,
    -0.19240343570709229,
    -0.12706275284290314,
    0.1699770838022232,
    0.26863881945610046,
    -0.10701578855514526,
    -0.03779822587966919,
    -0.06767062097787857,
    0.05558207631111145,
    0.06148408725857735,
    -0.03445826843380928,
    -0.018822386860847473,
    -0.007597930729389191,
    -0.0027186088263988495,
    0.003467019647359848,
    -0.26657143235206604,
    -0.029667221009731293,
    0.1857101023197174,
    -0.055891260504722595,
    -0.060019031167030334,
    0.06737485527992249,
    -0.038918495178222656,
    -0.045035410672426224,
    -0.1498071402311325,
    -0.15015973150730133,
    0.11186741292476654,
    0.057124655693769455,
    0.16711947321891785,
    0.2237841784954071,
    0.20187999308109283,
    0.02212279662489891,
    0.07793829590082169,
    -0.11144962906837463,
    0.11177311837673187,
    -0.02343379706144333,
    -0.08419902622699738,
    0.029235713183879852,
    0.12327411770820618,
    0.059630997478961945,
    -0.04118343070149422,
    -0.14594365656375885,
    -0.11883178353309631,
    0.1824525147676468,
];

/// Four qubits, `chi = 4`; ket side of the overlap.
pub const IP4_KET: &[(usize, f64)] = &[
    (0, -0.916497861382668),
    (1, -0.0774770100056814),
    (2, -0.3905530508872181),
    (3, -0.038695257453215746),
    (8, 0.39242052841785685),
    (9, 0.005926209849421993),
    (10, -0.9193660433571464),
    (11, -0.027148413259157553),
    (16, -0.086494587815096),
    (17, -0.5161113650581821),
    (18, -0.3716843459879704),
    (19, -0.4149275842783076),
    (20, 0.3475684513942029),
    (21, -0.33731825676083277),
    (22, 0.03531924421420863),
    (23, 0.4242625462238508),
    (24, 0.1548611214464985),
    (25, -0.1629745551510658),
    (26, -0.3054123508603024),
    (27, 0.40742455983835185),
    (28, 0.051375370785247995),
    (29, 0.6739332289909812),
    (30, 0.1957074863128766),
    (31, 0.4416548486767887),
    (32, -0.4188134561454451),
    (33, -0.314779963690704),
    (34, 0.594871513074914),
    (35, 0.1253634938807484),
    (36, -0.3274468059583836),
    (37, -0.0033649355295961303),
    (38, -0.19836336090039158),
    (39, 0.4575368665727339),
    (40, -0.4319730509600821),
    (41, 0.46315571812161255),
    (42, -0.177092245869463),
    (43, 0.17165251096868606),
    (44, 0.4478329658040191),
    (45, 0.028284989048036946),
    (46, -0.5484962316855873),
    (47, 0.1893602226102037),
    (80, 0.5355256929496379),
    (81, 0.0),
    (82, -0.82749362448062),
    (83, 0.02904044194569624),
    (84, 0.0),
    (85, 3.1712172333499e-18),
    (88, 0.08673107202101067),
    (89, -0.26957426786565664),
    (90, 0.10136853320009953),
    (91, -0.16847174758615416),
    (96, 0.7256882794862672),
    (97, 0.0),
    (98, 0.49992356328580695),
    (99, -0.07465158451531788),
    (100, 0.0),
    (101, -2.73164461529292e-18),
    (104, -0.11096745459559126),
    (105, -0.11248021223295962),
    (106, -0.015939524128979008),
    (107, -0.04834685546748854),
    (112, -0.09137803308510727),
    (113, 0.0),
    (114, 0.041828533843678406),
    (115, -0.055516336152773675),
    (116, -1.7346894763697954e-17),
    (117, -7.589266459117856e-18),
    (120, -0.06982795298266756),
    (121, -0.2607434376975409),
    (122, 0.04055209540168665),
    (123, -0.0998159882317749),
    (128, -0.0013533723870614552),
    (129, 0.0),
    (130, 0.0030153696871580518),
    (131, -0.0007536486755610136),
    (132, 1.3706310124710953e-17),
    (133, 5.271657740273443e-18),
    (136, 0.009007639720827557),
    (137, 0.01160295765732885),
    (138, -0.002650020644033365),
    (139, -0.0347660454843333),
    (144, 0.7934826958343173),
    (145, 0.2097612636620367),
    (146, 0.40098701589649566),
    (147, 0.06292071832569604),
    (148, 0.17644861904250161),
    (149, 0.02508862414716359),
    (150, -0.36011160812021614),
    (151, -0.013850284789667294),
];

/// Four qubits, `chi = 4`; bra side of the overlap.
pub const IP4_BRA: &[(usize, f64)] = &[
    (0, -0.916497861382668),
    (1, -0.0774770100056814),
    (2, -0.3905530508872181),
    (3, -0.038695257453215746),
    (8, 0.39242052841785685),
    (9, 0.005926209849421993),
    (10, -0.9193660433571464),
    (11, -0.027148413259157553),
    (16, -0.38520893663443145),
    (17, -0.08313325347846491),
    (18, 0.37387886041396534),
    (19, 0.7642074712965752),
    (20, -0.27881372303099244),
    (21, 0.1474857317523121),
    (22, -0.1410007330015855),
    (23, -0.039168047247753496),
    (24, -0.0590745502568466),
    (25, 0.11761847202902623),
    (26, 0.11269537822823146),
    (27, -0.3086460273383095),
    (28, -0.6327237072338668),
    (29, -0.28314375337094555),
    (30, -0.15819977431031695),
    (31, -0.6075990707063283),
    (32, 0.8082960956126871),
    (33, 0.4057876159937702),
    (34, 0.12408608368116913),
    (35, 0.3850457786727492),
    (36, -0.029431664112584088),
    (37, -0.08738621657419658),
    (38, -0.039495020284007906),
    (39, -0.0909603999525164),
    (40, 0.0164446476145238),
    (41, 0.095406687086266),
    (42, 0.015460689255213836),
    (43, -0.06589597358749627),
    (44, -0.5539889126392532),
    (45, -0.32341135258910775),
    (46, 0.1325213431271281),
    (47, 0.7463144784082719),
    (80, 0.3879496172458074),
    (81, 0.0),
    (82, 0.7012769606101399),
    (83, -0.12695868636166885),
    (84, 1.1103700291614824e-16),
    (85, 4.629873324419367e-18),
    (88, 0.36012400471668854),
    (89, 0.11784653120900945),
    (90, -0.5483875743376463),
    (91, -0.1637597971215351),
    (92, 4.775145770909058e-18),
    (93, 1.79364974950039e-17),
    (96, -0.640372512495744),
    (97, 0.0),
    (98, 0.2548579767415688),
    (99, -0.034454109442162505),
    (100, 9.488019311652e-17),
    (101, 1.0530014819474617e-17),
    (104, 0.44752468366493875),
    (105, -0.12895732984521566),
    (106, 0.1804908199125375),
    (107, -0.11201596042542786),
    (108, -1.4515782829099415e-19),
    (109, 4.5471437738577115e-18),
    (112, -0.16454563839144662),
    (113, 0.0),
    (114, -0.024056710061469547),
    (115, -0.1203420866582053),
    (116, -3.1207550335607834e-17),
    (117, -1.1028836460006021e-17),
    (120, -0.13538852421270092),
    (121, 0.17274307394393765),
    (122, -0.15244639495683454),
    (123, -0.06245206468145512),
    (124, -1.5247965666831198e-18),
    (125, 1.4070202389092805e-18),
    (128, 0.03453277422180958),
    (129, 0.0),
    (130, -0.02287709221765174),
    (131, -0.06623554376900025),
    (132, -2.100635435828622e-17),
    (133, 8.534146150309484e-19),
    (136, 0.03199717502952966),
    (137, 0.03835220263481228),
    (138, 0.05616254494558428),
    (139, -0.05491726676672418),
    (140, -1.6687930640538633e-18),
    (141, -1.0473130086052244e-19),
    (144, 0.7934826958343173),
    (145, 0.2097612636620367),
    (146, 0.40098701589649566),
    (147, 0.06292071832569604),
    (148, 0.17644861904250161),
    (149, 0.02508862414716359),
    (150, -0.36011160812021614),
    (151, -0.013850284789667294),
];

/// `⟨bra|ket⟩` for the two chains above.
pub const IP4_OVERLAP: (f64, f64) = (0.5524505270081406, 0.2471560922399374);
