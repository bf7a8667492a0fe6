// @generated by scripts/gen_gauss_table.py, do not edit.

/// Tail table for sigma = 4: entry k is 2^127 * P(|x| > k).
pub(crate) const SMALL_CDT_LEN: usize = 38;

/// Sigma of the small tier.
pub(crate) const SMALL_SIGMA: u32 = 4;

#[rustfmt::skip]
pub(crate) static SMALL_CDT: [u128; SMALL_CDT_LEN] = [
    0x733bdd66_15e4d7b9_77fc7a09_c034f52d, 0x5a7cb1c5_11260b47_45446e3a_1fb3ffae,
    0x43f474c2_f09f5f1d_f9864b34_001feabb, 0x30ae9ed3_436b4a90_47fef54f_e51fa08a,
    0x21322c0c_29dfaed7_e6143532_006e6c7b, 0x1581a642_10e74b04_2ef80a97_3e587f44,
    0x0d37a216_a7d808ce_b35ac291_cd7c160d, 0x07b210c8_f8127ddd_6c82a792_111f41ff,
    0x043d7a42_1b0b234f_a02b93cd_52ac7b9b, 0x02357482_7352ef19_712f1d0a_d92615d3,
    0x0116457d_1b5dc9b7_27daad24_7001655a, 0x00814852_b843ba97_b982a086_6dd42509,
    0x0038abcd_b8e5e075_58b4a42e_330f95d8, 0x00176d5b_f5d19034_d183fe83_528b8a8c,
    0x00092110_0d2d9d25_39ceacd5_4553bb88, 0x00035a2b_5202f341_0d2196b5_8c6fa269,
    0x000128d8_35aadcaa_7fdcc57d_5286366b, 0x000060b2_b6bb9645_6755c2a3_01ef9efd,
    0x00001da8_4d6ea216_538b6475_248d68d5, 0x0000088f_e8fee709_e797e586_40cde919,
    0x00000253_8ea5b4ca_97ced352_cb3b02d1, 0x00000098_4419d263_c97f4d38_a4a98156,
    0x00000024_a068edcf_a3aa7284_dd0efb75, 0x00000008_49b6a17c_47b50bc4_fae63c9f,
    0x00000001_c3966288_25b5fa37_d5f65810, 0x00000000_5a65ba23_2b6e43dc_7c976b7c,
    0x00000000_11046477_99745fdf_88c4e1a0, 0x00000000_0303260a_1a98690b_85075017,
    0x00000000_0080598b_b6e23fb1_6f11a291, 0x00000000_001415b5_c24b9f9d_41516d9e,
    0x00000000_0002f46d_8ff3b3fc_d0b9b304, 0x00000000_0000689d_2ed9684c_55da46d7,
    0x00000000_00000d99_b1f1432b_841b3f01, 0x00000000_000001a9_77a5bef9_007964e3,
    0x00000000_00000030_ddc0fc4b_c61b6457, 0x00000000_00000005_457fa55c_de481ff2,
    0x00000000_00000000_87e08dbe_37b9d95c, 0x00000000_00000000_0be5de7b_ce953902,
];

/// Tail table for sigma = 512: entry k is 2^127 * P(|x| > k).
pub(crate) const LARGE_CDT_LEN: usize = 4842;

/// Sigma of the large tier.
pub(crate) const LARGE_SIGMA: u32 = 512;

#[rustfmt::skip]
pub(crate) static LARGE_CDT: [u128; LARGE_CDT_LEN] = [
    0x7fe677ba_cc2bc9af_72eeba55_2aa03b81, 0x7fb36736_c69443e2_55d26226_7cc4c4f7,
    0x7f8056c5_e72aa905_35636bc1_1dd1809a, 0x7f4d4674_f1fda096_1e06f8b1_bc97b6dd,
    0x7f1a3650_ab03e275_23c19cf0_ddf88370, 0x7ee72665_d612a402_488883cf_e4899a28,
    0x7eb416c1_36d40565_457f2ef8_e98b6f68, 0x7e81076f_90bd7f0b_2e55776a_d1c36510,
    0x7e4df87d_a7064f65_e59b3b5d_1a999284, 0x7e1ae9f8_3c9de8f9_586bf78c_df56553a,
    0x7de7dbec_142260c2_774c6fa1_ac88140b, 0x7db4ce65_efd6dd03_e177814f_1826f71f,
    0x7d81c172_919a0484_372549f9_0b13a037, 0x7d4eb51e_badc6e4a_0690e87c_8ec3ebbd,
    0x7d1ba977_2c9711e1_46a55e15_2e593d03, 0x7ce89e88_a741b836_51496415_f97b734e,
    0x7cb5945f_eac96d12_4e3c7a72_66e0666a, 0x7c828b09_b686f144_fe5cff2b_1d786be9,
    0x7c4f8292_c9352d87_d5ffcb18_6bf29053, 0x7c1c7b07_e0e7a626_53bd9fea_3b10999e,
    0x7be97475_bb00ef77_7fc1a864_c35d8ffe, 0x7bb66ee9_14292334_7e3669ea_54a70427,
    0x7b836a6e_a84456b8_1debd07b_f63551ea, 0x7b506713_32691233_4ab977ea_492d7a6b,
    0x7b1d64e3_6cd6c8e2_4974018a_5e5d0b4f, 0x7aea63ec_10ec524e_a18b292a_543d550d,
    0x7ab76439_d71e64a9_96906a29_77f14d07, 0x7a8465d9_76ee104b_11fb629f_d89e8d60,
    0x7a5168d7_a6df3c60_db81c2b8_e6375716, 0x7a1e6d41_1c6f24d9_fc447e49_8866e0e2,
    0x79eb7322_8c0ad99a_26eb2ae8_4ea51e25, 0x79b87a88_a905bf00_fc88fa40_9b842714,
    0x79858380_25900fd1_03d49c09_0ee7fe32, 0x79528e15_b2ad6082_25d58a29_62e45e8a,
    0x791f9a56_002b240b_80add99a_26fc065d, 0x78eca84d_bc973230_5e97a8f5_3bd4425d,
    0x78b9b809_95364f5c_1c88b04a_ca0902f7, 0x7886c996_35fab618_c935528b_eb4b6bd6,
    0x7853dd00_497aa22c_425ee5d8_ac60b7cb, 0x7820f254_78e6dd67_9376bb86_bc96a5d9,
    0x77ee099f_6c014e34_55a8c943_42ca9a50, 0x77bb22ed_c91387eb_ce55b8ec_f9ad9eeb,
    0x77883e4c_34e55d03_85e49b81_bc3ef733, 0x77555bc7_52b3731b_0da08bbf_9cc43fee,
    0x77227b6b_c425d8f6_a80e3e16_a9497e53, 0x76ef9d46_29469e72_83c8d49c_5be5bb84,
    0x76bcc163_20786e7a_35845668_96e0f2fb, 0x7689e7cf_466d2b10_1a4ee9d7_8e361229,
    0x76571097_361c8b70_47907083_08f64877, 0x76243bc7_88babc5a_aa9a6a74_17aa0940,
    0x75f1696c_d5af028f_f5d81c55_fe586914, 0x75be9993_b28a5f8c_f5d8e2c1_f3abc16f,
    0x758bcc48_b2fe388f_e4846bac_c2ccf869, 0x75590198_68d2fff3_4cca475b_79437c14,
    0x7526398f_63dee0ea_0d0bed00_01c51508, 0x74f3743a_31fc6da8_0259f55b_7a469b01,
    0x74c0b1a5_5f015002_e262f8d0_6530ae76, 0x748df1dd_74b4fc96_c5a437a5_34bf6b76,
    0x745b34ee_fac76879_df0a047f_26b78a5b, 0x74287ae6_76c7c18a_d9b7dc29_46c283cb,
    0x73f5c3d0_6c1b2965_5126348b_339d3220, 0x73c30fb9_5bf37307_d3266172_7bc89e0c,
    0x73905ead_c545e336_d6ab82d7_9300a047, 0x735db0ba_24c1f3a8_0d725017_dbe16c3c,
    0x732b05ea_f4c81901_71c8c8e8_1db104ab, 0x72f85e4c_ad608bb7_6cca6a60_b01d408d,
    0x72c5b9eb_c43213d5_6c65877c_e1323020, 0x729318d4_ac78d7bc_3b6adbeb_32526097,
    0x72607b13_d6fd2de1_68c16978_d8a00f53, 0x722de0b5_b20a719b_059e3740_7195a3a9,
    0x71fb49c6_a965db02_fd51a9c5_18006737, 0x71c8b653_264559fd_43daf025_df990b0b,
    0x71962667_8f46746c_12fd78a2_e200db78, 0x71639a10_4865279d_680c91f7_c6814c16,
    0x71311159_b2f2ccfc_ef065bf5_d8571b28, 0x70fe8c50_2d8d0215_81e8fcd1_87d0ba51,
    0x70cc0b00_141493ed_5d6bc677_098d8b49, 0x70998d75_bfa46dc8_26719ccc_38b40a2b,
    0x706713bd_86888b59_d5a29011_7160c945, 0x70349de3_bc34ee75_98a04ac8_2112f364,
    0x70022bf4_b13c9843_b23bb5fe_55793f9f, 0x6fcfbdfc_b3488609_5cf21f1e_351e35cb,
    0x6f9d5408_0d0eb18d_acc54514_06ea84fd, 0x6f6aee23_06491526_673c0d9b_7d50ce28,
    0x6f388c59_e3acb377_c2014ccc_bcab4401, 0x6f062eb8_e6e0a2f1_f22b0ebb_5c915ecc,
    0x6ed3d54c_4e751d17_6fb74376_94046799, 0x6ea18020_55da9196_ca3a9773_a32f1fe7,
    0x6e6f2f41_3558bd42_e51bb404_af24bfd9, 0x6e3ce2bb_2205c4f4_6b002bc1_49dcf340,
    0x6e0a9a9a_4dbd545f_414904a5_a0e0b683, 0x6dd856ea_e717c0e6_bda33444_a6362e11,
    0x6da617b9_1961307b_58c488fb_36afd602, 0x6d73dd11_0c90c48c_926f7508_b9f95e2c,
    0x6d41a6fe_e53fc919_b3c80d5e_fa4aacfb, 0x6d0f758e_c4a0e7ec_15e25d98_5b7d4322,
    0x6cdd48cc_c8776005_8b3e04b1_c1b37aff, 0x6cab20c5_0b0e414d_839cf2ec_0069cf5a,
    0x6c78fd83_a32fac87_7a4b28c6_14e2807b, 0x6c46df14_a41c179d_378391aa_ef42dedd,
    0x6c14c584_1d819647_6622932e_e08e8b05, 0x6be2b0de_1b73271e_f749bc33_ff8469b5,
    0x6bb0a12e_a6600521_c5f936ca_3f13e65d, 0x6b7e9681_c30afdb4_e4f34d0d_ca381ec8,
    0x6b4c90e3_7281cb2e_f97c85b8_97c11731, 0x6b1a905f_b21473f4_fdb7a9cc_c58a7903,
    0x6ae89502_7b4cae33_bd787b0b_530764cc, 0x6ab69ed7_c3e54840_5872145a_b98fc02d,
    0x6a84adeb_7dc195aa_0c9eeb7c_2e1e0d9e, 0x6a52c249_96e4e107_83a84843_7addf7c2,
    0x6a20dbfd_f969e289_d5e9d2e7_7b863fce, 0x69eefb14_8b7a3b5f_6d73ab08_079c64c7,
    0x69bd1f99_2f45f5f0_eb225ded_772cb82b, 0x698b4997_c2fb0b02_27881eae_11b2841e,
    0x6959791c_20bcebc1_60f5e8d2_ad57b7e6, 0x6927ae32_1e9c10ce_9f75c86d_5eabbbac,
    0x68f5e8e5_8e8d8e45_4ef97426_b3260800, 0x68c42942_3e62acd2_0761c97e_4171dc6a,
    0x68926f53_f7c087de_7154a46c_3e265159, 0x6860bb26_8017b0dd_2e170cf0_097db7de,
    0x682f0cc5_989bd7bf_9fd1e23a_e0ff5d1c, 0x67fd643c_fe3b789f_66c71788_1f9cb576,
    0x67cbc198_69978ea5_5f0d55f2_2e369ef4, 0x679a24e3_8efb4c37_e1677c6b_0596ca88,
    0x67688e2a_1e53d87a_00bd1751_651c1d65, 0x6736fd77_c3281225_749897ea_d835037b,
    0x670572d8_249057c8_d7dfe57a_01f2cf89, 0x66d3ee56_e52e5573_d9bbe9fd_64fd0c54,
    0x66a26fff_a324d7da_f5541043_0d933959, 0x6670f7dd_f80fa4fc_3ba35c70_0dee990a,
    0x663f85fd_78fb5a4e_b13df007_32e7381a, 0x660e1a69_b65d5085_b85f7ba8_b4354d6f,
    0x65dcb52e_3c0b84f1_f60d701d_1b4a15a7, 0x65ab5656_91348889_177ac2c8_5cdedbf9,
    0x6579fdee_3857749d_d32ee487_1fccf4d7, 0x6548ac00_af3be551_77b6327e_e6e9ccd3,
    0x65176099_6ee9f9c8_4fd7c3f9_1d43430d, 0x64e61bc3_eba25a2a_1a731c7e_c6d46a5e,
    0x64b4dd8b_94d64377_ca400bbb_9d503938, 0x6483a5fb_d51f993f_b7b3faf7_178b956d,
    0x64527520_1238fd39_654a2812_1b829ec1, 0x64214b03_acf5ecd1_ec57edf0_efda6489,
    0x63f027b2_013ae4b2_1e735028_67ce90fb, 0x63bf0b36_65f58a47_5d40a1e6_f2e5a3c8,
    0x638df59c_2d14db58_203c64bf_65a8aa04, 0x635ce6ee_a38163ad_15c879aa_71172bf0,
    0x632bdf39_111578d7_c2678bd8_50a77797, 0x62fade86_b8957c1f_76a75076_80c9892b,
    0x62c9e4e2_d7a8229d_69c1e72a_2545951d, 0x6298f258_a6cec390_bc786b98_4a5bae73,
    0x626806f3_595dacf3_1d14b7ee_92ab183e, 0x623722be_1d747e56_bade8a1a_3900a25d,
    0x620645c4_1bf68a16_2ca0c875_31cde538, 0x61d57010_78833cde_e31e9e81_a6eb8b66,
    0x61a4a1ae_516e8b9e_b58dae46_16ef1dae, 0x6173daa8_bfb967dd_0b52b68e_0194a244,
    0x61431b0a_d70a3a88_1b58e964_cbc465a5, 0x611262df_a5a5653e_ae69d855_55363dbc,
    0x60e1b232_3465ca1e_c6ec6d2d_a450bd8c, 0x60b1090d_86b55a21_8564f631_fedb9847,
    0x6080677c_9a85aa0c_95f6f3de_4b60da58, 0x604fcd8a_68488e01_68032cb9_9b489fa3,
    0x601f3b41_e2e8bbb2_65c9a999_4be1f659, 0x5feeb0ad_f7c27346_56b7ba5b_2ea0d21c,
    0x5fbe2dd9_8e9c2ef2_0bbe190d_2705018c, 0x5f8db2cf_899f5950_69b2c839_8c476ad5,
    0x5f5d3f9a_c5510a80_da5d7947_5f88ec64, 0x5f2cd446_188acc14_215c3a48_e8f50b8b,
    0x5efc70dc_547363cf_8690f807_044e8b40, 0x5ecc1568_4477a54e_3c3f227f_1c1fb374,
    0x5e9bc1f4_ae434a88_db6b9068_6bf44852, 0x5e6b768c_51b9d34a_c56fb2c4_523a2110,
    0x5e3b3339_e8ef6b9d_2e045d2d_86d1bf92, 0x5e0af808_2821d92f_854ff3d1_87099b5e,
    0x5ddac501_bdb16fc4_edbfce1b_10d292b4, 0x5daa9a31_521a0cae_5da52686_8395ee2c,
    0x5d7a77a1_87ec1959_00b31e69_5826e2ab, 0x5d4a5d5c_fbc594f8_61954941_c728aaac,
    0x5d1a4b6e_444b2553_d7e4f81d_50126911, 0x5cea41df_f2212ebe_aac73493_06e5533d,
    0x5cba40bc_8fe4f342_4c761d8c_b5ede45d, 0x5c8a480e_a225b902_06e64097_87b73676,
    0x5c5a57e0_a75df7df_659bb2b5_8d888763, 0x5c2a703d_17ec8e66_9c9b2dc4_3361480d,
    0x5bfa912e_660dfe0a_20316dab_130801f7, 0x5bcababe_fdd5aeb4_950e8ce8_43c0e545,
    0x5b9aecf9_452739b8_33ec4d03_bdd0e0b4, 0x5b6b27e7_9bafbc22_afa5275d_c7f80e09,
    0x5b3b6b94_5adf307c_a046d022_11e64db4, 0x5b0bb809_d5e1cffb_69459a71_8cc21496,
    0x5adc0d52_59997b2c_848704a9_7b18c6ef, 0x5aac6b78_2c972a21_0f80b8b9_4cb7f92a,
    0x5a7cd285_8f146420_6b269976_9bbb2c7d, 0x5a4d4284_baecbee8_b2d6259b_ed4bff62,
    0x5a1dbb7f_e3976583_c1d7a679_46dae7c1, 0x59ee3d81_3620a6b7_726e6643_34582891,
    0x59bec892_d9238b17_b4c8a35b_a2ee2404, 0x598f5cbe_ecc372c1_0f6e3df5_ee8f844e,
    0x595ffa0f_8aa5bac2_0e124f32_3c3f9d6f, 0x5930a08e_c5eb6a3a_16e80f68_91d25cbc,
    0x59015046_ab2ae734_11cec815_ef40018d, 0x58d20941_4069b343_3fd31fff_9eabd4d5,
    0x58a2cb88_85162fe8_94a5f904_18cf43e8, 0x58739726_72016ac6_d6c2721c_8733f4d2,
    0x58446c24_f958f1ab_be0d88bb_529086cb, 0x58154a8e_06a0ae74_3bc2667e_22dab17e,
    0x57e6326b_7eaccad2_097ebea4_750dd78f, 0x57b723c7_3f9b9bf8_903ad584_b9459bd2,
    0x57881eab_20cf9637_2ae8fefa_e03e6f73, 0x57592320_f2e94886_bb60ab3a_f41a2d9f,
    0x572a3132_7fc16010_7b199753_a51d30c6, 0x56fb48e9_8a62b3b3_e41483ce_64fd8819,
    0x56cc6a4f_cf045791_81200c17_3cc3e957, 0x569d956f_0303b8a0_6771f893_da0b24bd,
    0x566eca50_d4dec054_0e4fc780_5df115d2, 0x564008fe_ec2e0058_2c3c49c5_14ef6227,
    0x56115182_e99ee668_33d42d08_cae1058e, 0x55e2a3e6_66edf847_fd303f58_8e75c53c,
    0x55b40032_f6e117e3_1b4a3ef2_0cb08e36, 0x55856672_2541cf98_4f803e35_8d9c3b43,
    0x5556d6ad_76d7a6b6_7feb24ad_c8facc25, 0x552850ee_69627e30_87cebead_29cbcc7f,
    0x54f9d53e_7394f58d_2bf53979_6ac402b3, 0x54cb63a7_050ed818_6f4cf6a8_0f8c494e,
    0x549cfc31_8657925b_769e6a78_bc658872, 0x546e9ee7_58d8afe0_1ca85afe_6edd76aa,
    0x54404bd1_d6d86145_4a636d26_76e8f671, 0x541202fa_53740aa9_199a958b_90db6215,
    0x53e3c46a_1a9ada6d_ba6cd9f3_971a6651, 0x53b5902a_7108685e_06adf1cc_be3a3ace,
    0x53876644_943f5d36_a076dc78_962d887f, 0x535946c1_ba842298_6b8d9031_d445a320,
    0x532b31ab_12d79b69_239b9066_ee2cda58, 0x52fd2709_c4f1e4a6_c376a30d_44dee1a3,
    0x52cf26e6_f13d1eb2_64051e4a_f31fa561, 0x52a1314b_b0d03f17_2b887f79_5bc59539,
    0x52734641_1569ead1_d855468e_4af09e77, 0x524565d0_296b591d_64368a0f_75d56ad0,
    0x52179001_efd33ec9_2fee7c7b_44a18714, 0x51e9c4df_6438c21d_18734935_07c25833,
    0x51bc0471_7ac6774f_c9b16130_b4a5302b, 0x518e4ec1_20356593_94c1a385_2cf5ad79,
    0x5160a3d7_39c814be_01a2e069_3d0674ad, 0x513303bc_a545a38e_46a322a7_2805469f,
    0x51056e7a_38f4e696_c1be10ff_9f03c61e, 0x50d7e418_c3978fcd_824ab304_950723c3,
    0x50aa64a1_0c655ec7_e3641065_c652a292, 0x507cf01b_d30759a5_29859b3d_018d5313,
    0x504f8691_cf930eac_07de3a61_d100a444, 0x5022280b_b285de9e_e3e334ee_c0bdc240,
    0x4ff4d492_24c04fca_9faf50b2_d08f2f9d, 0x4fc78c2d_c78169d3_a5ba470c_ef84c3a8,
    0x4f9a4ee7_34621a44_e271636b_50967f1f, 0x4f6d1cc6_fd50a1e4_4a33c922_b6f11f17,
    0x4f3ff5d5_ac8c0ad0_7c2ba050_0c6485cc, 0x4f12da1b_c49fa76b_04715fbd_b971f555,
    0x4ee5c9a1_c05e9a12_b1d7b11a_96167f38, 0x4eb8c470_12df65b1_65ad21f5_2390a8f9,
    0x4e8bca8f_27778720_b5ad13a4_fec942c9, 0x4e5edc07_61b71768_aa434356_73c74aea,
    0x4e31f8e1_1d6476db_d52cee87_3e9a5243, 0x4e052124_ae780113_ee68242c_1edc5aae,
    0x4dd854da_6117c9d2_17455c26_c9ffce3f, 0x4dab940a_799362c5_d5511262_20cf895c,
    0x4d7edebd_345faa3d_c8aafd8b_7a979741, 0x4d5234fa_c612a2c5_133ea7a4_3c29ae65,
    0x4d2596cb_5b5f53b0_582dcd3c_1e53f24a, 0x4cf90437_1911b29d_2c9813b3_ffd4b2bb,
    0x4ccc7d46_1c0a95e6_c4c57c18_4a8f318f, 0x4ca00200_793bb012_9a919391_db3caa1b,
    0x4c73926e_3da39437_bbcce0b9_605ee4c1, 0x4c472e97_6e49c363_61208ada_bebe9e59,
    0x4c1ad684_083ac2fd_5fd5d1fe_7a91bd75, 0x4bee8a3c_00843c2e_fab7c0eb_3736664c,
    0x4bc249c7_4431244e_8819a9c8_206ca424, 0x4b96152d_b845ee52_54e0971b_8700e9b0,
    0x4b69ec77_39bcc54d_1e410209_e5e03e75, 0x4b3dcfab_9d81cff6_6db4f06d_1218d41f,
    0x4b11bed2_b06f7d41_14813606_e2152d31, 0x4ae5b9f4_374ada01_f5f3101c_5e2f3456,
    0x4ab9c117_eebfefa9_4151ce8d_6f42fa30, 0x4a8dd445_8b5e2c10_2e52d558_3bf2a15c,
    0x4a61f384_b994d25d_40b111b6_4ee71cfa, 0x4a361edd_1daf7501_095c22eb_5e48d906,
    0x4a0a5656_53d278cd_4d870cb0_d3fa54a5, 0x49de99f7_eff7a128_6db26c1c_05d71c74,
    0x49b2e9c9_7deaa55e_d8a2f41c_6a4a877f, 0x498745d2_8145cf14_480a885e_c6e00063,
    0x495bae1a_756ea1d6_7680c09c_a111efe2, 0x493022a8_cd928bd2_f03f0f34_9d482db8,
    0x4904a384_f4a39fb1_91ed505f_6b922d21, 0x48d930b6_4d555795_3aa54769_9013d292,
    0x48adca44_32196144_282ea0fe_5a236726, 0x48827035_f51c7379_665190aa_829ac4b7,
    0x48572292_e0432c60_abfc2828_e523c38a, 0x482be162_3526f93d_f2d63499_f783595d,
    0x4800acab_2d130742_07c0dc3b_c9f0214a, 0x47d58474_f9013d8d_44a2824d_65c0ac25,
    0x47aa68c6_c1974061_95c4ba2a_184ae776, 0x477f59a7_a7237d84_def169f8_0bbfd9f3,
    0x4754571e_c19a41d4_c665c415_4bc5c30f, 0x47296133_2092d80c_dd9d9045_e2732b17,
    0x46fe77eb_cb44b0c0_11e775fe_e434869f, 0x46d39b4f_c0849386_40a3b371_6a92bf2d,
    0x46a8cb65_f6c1d95e_bd02048c_670618e5, 0x467e0835_5c03b048_87098d5d_bb9f4e0f,
    0x465351c4_d5e66810_e5ae7f4c_de2a1f05, 0x4628a81b_4198c859_07b503cf_c590a09d,
    0x45fe0b3f_73d96fd3_411fd49b_ae49fc34, 0x45d37b38_38f43cb8_6ceaec05_2b1e3d06,
    0x45a8f80c_54bfbe75_ecd7fb4d_a1e4d126, 0x457e81c2_829ab094_b31af2f8_043e3c35,
    0x45541861_75697ed9_b3c0fdd3_edbc70ef, 0x4529bbef_d793d2a0_0dbbf516_16febc73,
    0x44ff6c74_4b02296d_2d8fa557_e59d5f5c, 0x44d529f5_691b74bf_1db5546e_1518df40,
    0x44aaf479_c2c2c315_2ae4f157_b55b2fcd, 0x4480cc07_e054f232_f4924ca9_e06fe13a,
    0x4456b0a6_41a66a9d_f40fc357_5714d64b, 0x442ca25b_5e00e455_76ef01fa_1d3216bf,
    0x4402a12d_a42134c4_fb640e3b_184bcebe, 0x43d8ad23_7a3525f0_cf9eb0e9_b3da4018,
    0x43aec643_3dd956dc_c742c80a_bc31d148, 0x4384ec93_4417252c_cc610ec6_c7325842,
    0x435b2019_d9629fff_038fa3c7_f257f75d, 0x433160dd_419883ff_2d041f4c_0db4eedc,
    0x4307aee3_b7fc40b2_ded87ae8_1b050085, 0x42de0a33_6f3606fe_26f07f95_c73b3227,
    0x42b472d2_9150e0e0_1546fcf1_3865ef44, 0x428ae8c7_3fb8d266_a1c0d047_90f1d001,
    0x42616c17_933903d9_52ffd4e3_6429d9bd, 0x4237fcc9_9bf9f519_fe115276_6d1b6fdf,
    0x420e9ae3_617fba3a_e93a7c15_3cd41028, 0x41e5466a_e2a84149_8e922b5b_cf7e2ee0,
    0x41bbff66_15a9a14d_2d895155_cc9fcf5e, 0x4192c5da_e8107278_4cfbb2ea_6bb390da,
    0x416999cf_3ebe2f8c_41e089fd_1bdaadc8, 0x41407b48_f5e7a06d_c136a846_461b4d59,
    0x41176a4d_e1134de9_7651d61a_4ab41c16, 0x40ee66e3_cb17fea7_893f76d1_d3df5359,
    0x40c57110_761b3d4c_f38f1721_4f55adfd, 0x409c88d9_9b8fe7c9_74688823_15a9655e,
    0x4073ae44_ec34c7d0_e77ca4cf_3b9c2ae8, 0x404ae158_1013347e_b507efa5_46ebf104,
    0x40222218_a67dbd22_03cef3e0_21802019, 0x3ff9708c_460edd31_48b3d90d_a45aaad3,
    0x3fd0ccb8_7ca7b963_c242f99b_90232d9a, 0x3fa836a2_cf6ee5ef_6159a50e_d787be04,
    0x3f7fae50_bacf35e9_92d69d43_1277e8c4, 0x3f5733c7_b27693c9_51176b42_250e92c1,
    0x3f2ec70d_2154e308_d6e073ea_ccbe5ce5, 0x3f066826_699aeae5_402fd68a_b79060b6,
    0x3ede1718_e4b94a3a_5864af80_48ecbb0b, 0x3eb5d3e9_e35f7478_c8156e8a_bed229fb,
    0x3e8d9e9e_ad7ab7b4_c7e8a32d_94bff90c, 0x3e65773c_82354bcb_70c408e5_29950c9f,
    0x3e3d5dc8_97f56a9c_b4add034_db8fbb50, 0x3e155248_1c5c7157_fecc380e_7daf8d8b,
    0x3ded54c0_34460ad9_6c079bda_faf781f5, 0x3dc56535_fbc76315_80f33c8c_ff3d5857,
    0x3d9d83ae_862e6391_34c9558f_44522258, 0x3d75b02e_de00f8e4_1c7797e5_1061d42c,
    0x3d4deabc_04fc6142_73f2052e_6b874804, 0x3d26335a_f414840c_b7437011_cc70f09e,
    0x3cfe8a10_9b735262_701cb656_cea71c09, 0x3cd6eee1_e27830b5_cff6312a_3c37e7dd,
    0x3caf61d3_a7b7695d_a231efe1_6100636f, 0x3c87e2ea_c0f9a823_15112f53_e73a0cf6,
    0x3c60722b_fb3b7ec8_cbbc399f_74546ca2, 0x3c390f9c_1aacf288_9f1185da_2f3a9201,
    0x3c11bb3f_dab11285_666fa2c0_a1823220, 0x3bea751b_eddd972e_1535488b_414f8dbc,
    0x3bc33d34_fdfa8a8f_6d43f277_556a9c85, 0x3b9c138f_ac01f991_7a6badb8_4d647c1c,
    0x3b74f830_901fae1d_fe4a76e7_f05187b1, 0x3b4deb1c_39b0f22c_e7d69df5_fc25142f,
    0x3b26ec57_2f445bb3_e582503f_0cff4a83, 0x3afffbe5_ee99a176_14a6aded_db531467,
    0x3ad919cc_eca178b0_c4aec812_b9ef6e54, 0x3ab24610_957d7ba2_384ea4cf_ebd8ad96,
    0x3a8b80b5_4c8018e7_42f00354_803cea7a, 0x3a64c9bf_6c2c8bac_946626c3_ab09d20c,
    0x3a3e2133_4636dcb0_78eb8216_e4271ef6, 0x3a178715_2383ec11_c767cbea_364dce57,
    0x39f0fb69_442983e8_ac02dc3a_9012e0c0, 0x39ca7e33_df6e73a5_f118d395_b4c0bd32,
    0x39a40f79_23cab435_5cbe7f1c_1e39093d, 0x397daf3d_36e794df_ad29cae9_8e5260d0,
    0x39575d84_359ff0e8_b28170cd_297aa2ba, 0x39311a52_34006de5_f8d0ff5a_aff0f217,
    0x390ae5ab_3d47c2ca_6922e8d9_90d7a172, 0x38e4bf93_53e707a3_3d1195da_9fcedf91,
    0x38bea80e_71820e02_947a8f99_3614ac92, 0x38989f20_86efc213_f163cdef_f082f569,
    0x3872a4cd_7c3a9456_d2931ea3_c75185ef, 0x384cb919_30a0ebfb_99d28b09_c8b9becf,
    0x3826dc07_7a95a1de_df62a864_2929b8de, 0x38010d9c_27c0841f_48acf172_5bb44f28,
    0x37db4dda_fcfee249_ece4b724_ef0180a2, 0x37b59cc7_b6642219_46ecf5a0_096925eb,
    0x378ffa66_073a5cc2_a88c7c05_13d4d3c4, 0x376a66b9_9a0304ce_17b86b0b_45954b9e,
    0x3744e1c6_10779474_73872a4c_5f22f381, 0x371f6b8f_038a447f_b333a843_16959379,
    0x36fa0418_0366cba9_067a1716_9a8322ab, 0x36d4ab64_97732670_9384721c_0792d6fd,
    0x36af6178_3e50676a_8395fefc_5890794f, 0x368a2656_6ddb8ffd_04a9c312_6d0e5819,
    0x3664fa02_932e718a_db489b1e_ececd1b6, 0x363fdc80_12a09706_14f85a03_171ec919,
    0x361acdd2_47c836e6_60ce1bd2_3450ead9, 0x35f5cdfc_857b2d7e_88e2e613_d710ce52,
    0x35d0dd02_15cfffac_7caacd45_b2165518, 0x35abfae6_3a1ee5df_517c3b26_e8864fca,
    0x358727ac_2b02df6e_93eea992_6c5f303d, 0x35626357_185ace3e_3a1e4302_0d0c3fb3,
    0x353dadea_294a9aaa_7c546c75_9fe8e096, 0x35190768_7c3c5fb6_cf14547c_0472fa6a,
    0x34f46fd5_26e19f7b_2f16506e_e3874959, 0x34cfe733_36347fca_e5552363_67401d69,
    0x34ab6d85_ae790f0f_def5518c_6efc4dc2, 0x348702cf_8b3e9155_aa806e55_aacb260f,
    0x3462a713_bf60d57f_21acf2bf_4788d807, 0x343e5a55_350992a1_bcb6abb9_002faba7,
    0x341a1c96_cdb1cd81_82244487_e2961733, 0x33f5eddb_62234628_7bbbe69e_f276fe4d,
    0x33d1ce25_c279ed94_8f5b6d97_c5e213f7, 0x33adbd78_b6256376_906851d9_70687e5c,
    0x3389bbd6_fbea7bfd_54983d8a_3c73d1ac, 0x3365c943_49e4cda7_8ced4c10_cc06a021,
    0x3341e5c0_4d884717_19e84af4_8821bad9, 0x331e1150_aba2cce0_88280181_3c69aabe,
    0x32fa4bf7_005ddf51_58ee992f_eafe5764, 0x32d695b5_df404827_b055c95c_e1a8bcd5,
    0x32b2ee8f_d32fd035_f95772fa_70311363, 0x328f5687_5e72fced_063af24d_bb0a7bf9,
    0x326bcd9e_fab2d5c7_2a6fa2c9_3e845d05, 0x324853d9_18fcb18e_c162f113_a1cf84e0,
    0x3224e938_21c40b7a_8c73ee62_145b4eae, 0x32018dbe_74e4601a_48c7b387_d1663967,
    0x31de416e_69a3120d_d4710e58_4a1582d3, 0x31bb044a_4eb15681_311afdf2_114ea0ad,
    0x3197d654_6a2e2967_a93076d4_8f431b04, 0x3174b78e_f9a84970_5354d2b3_acc1c457,
    0x3151a7fc_32203bae_26e73e20_4666eaae, 0x312ea79e_400a56ed_cb40737a_bc054d33,
    0x310bb677_4750d6b3_425d2b41_f0bf9588, 0x30e8d489_6355f5d9_86b8e98b_3f14efe0,
    0x30c601d6_a6f610ce_2b3c4301_01dcdb58, 0x30a33e61_1c89cf63_034f64c2_203dd63f,
    0x30808a2a_c5e8562f_d05da555_3abbba4a, 0x305de535_9c697f7d_e96134e0_45072812,
    0x303b4f83_90e81bb7_c866b31e_f87c5991, 0x3018c916_8bc43956_615f8d27_e29e1c83,
    0x2ff651f0_6ce57446_1d0f96cb_e9a25d11, 0x2fd3ea13_0bbd4cbd_4a6665f4_b8d03596,
    0x2fb19180_3749857d_d027946c_0f3ca196, 0x2f8f4839_b616897b_e0664053_7a79d15d,
    0x2f6d0e41_4641d8e3_6707f78f_4c738253, 0x2f4ae398_9d7c7d75_e441b8a0_da908405,
    0x2f28c841_690d863a_5bcee5de_185eb80f, 0x2f06bc3d_4dd48a78_f97df874_b6dc8f4e,
    0x2ee4bf8d_e84c33fc_039978e4_e18f4690, 0x2ec2d234_cc8cd08f_abad4c25_b4990687,
    0x2ea0f433_864eeaba_4630c8d8_3e6a878e, 0x2e7f258b_98ede9a6_69b5500c_543d027b,
    0x2e5d663e_7f6ab838_6e5f5a3e_1813b160, 0x2e3bb64d_ac6e7348_bea5144f_87bcd95d,
    0x2e1a15ba_8a4d1efc_6291d224_d73c388b, 0x2df88486_7b086335_2720cddd_154065ce,
    0x2dd702b2_d8524f12_bba3ebe5_4e3e109c, 0x2db59040_f390237e_179c95b8_00515de8,
    0x2d942d32_15dd24b8_73ed3734_66783e53, 0x2d72d987_800d72e7_1ad98d2a_5ac3263f,
    0x2d519542_6ab0e995_4aeac6eb_f5cb420f, 0x2d306064_06160625_617a8833_880e5eef,
    0x2d0f3aed_7a4cd52a_7a652413_2890051d, 0x2cee24df_e729e6a3_ab2ffc6d_29480159,
    0x2ccd1e3c_64494911_f8ccd2f6_cf5f8c07, 0x2cac2704_01118b62_200e102f_68009fde,
    0x2c8b3f37_c4b6c5a3_41da990e_22222704, 0x2c6a66d8_ae3da883_7d39c454_147c297c,
    0x2c499de7_b47e938b_7a69632a_d1d6b590, 0x2c28e465_c628b211_e358a49a_66225b0a,
    0x2c083a53_c9c51edf_bf1ae6dd_4215c65d, 0x2be79fb2_9dba0e7e_9f2d52f9_65c9a150,
    0x2bc71483_184e0029_86c16c72_29dbe0c4, 0x2ba698c6_07aaf559_6da5965d_b9cc940a,
    0x2b862c7c_31e1afe6_39daf687_46fe0845, 0x2b65cfa6_54ecf6b5_046e1c40_105ec6e2,
    0x2b458245_26b4e0ec_77bd68a4_b2130e82, 0x2b254459_551227a8_0efd6ed3_35b69c89,
    0x2b0515e3_85d17e22_f880611c_c71fb768, 0x2ae4f6e4_56b6f053_560a29c1_cca17547,
    0x2ac4e75c_5d8147ee_904f0738_cd2a0b26, 0x2aa4e74c_27ed77cf_6c9e7232_c7269cf3,
    0x2a84f6b4_3bba0db6_8dafbb2f_800b250c, 0x2a651595_16aaaa5e_02893309_6da76822,
    0x2a4543ef_2e8b7fd8_808dd9cd_1f708348, 0x2a2581c2_f134d634_dfe07daf_ec8e82de,
    0x2a05cf10_c48e965e_6b7ded24_0fe15480, 0x29e62bd9_0693db32_90b266ce_b76bb2d3,
    0x29c6981c_0d5688c4_73e0cc52_e11797e3, 0x29a713da_2702e9c6_eaf44d20_c3105402,
    0x29879f13_99e35315_58474846_298ff35d, 0x296839c8_a463cd53_db4c0af4_881e9cc6,
    0x2948e3f9_7d15c49f_46d5d84c_0d726742, 0x29299da6_52b3be45_47825109_298e7c1f,
    0x290a66cf_4c25147d_1f74e1df_bfe00697, 0x28eb3f74_8881b819_57575863_a08e3039,
    0x28cc2796_1f15f82a_bf6422fa_a93d7a95, 0x28ad1f34_1f664f8d_162012f6_ccb5e5f3,
    0x288e264e_91333855_a55abaf4_e72dc794, 0x286f3ce5_747d051c_210db92b_625c9bff,
    0x285062f8_c187c016_0ec4677f_009dc59d, 0x28319888_68df0ffc_f7568be5_8e0b421d,
    0x2812dd94_535a22b7_9ff1bc99_b8ea41cd, 0x27f4321c_621f9dbe_82ae3e88_2ff41c8e,
    0x27d59620_6ea99433_ba3d32a6_e3cf7759, 0x27b709a0_4ac982a6_8f9ef1e9_c5eb1b0c,
    0x27988c9b_c0ac507a_d4418075_db0cb154, 0x277a1f12_92de56ec_2e680898_a899cc48,
    0x275bc104_7c4f6da5_794d55cf_2226cc90, 0x273d7271_3056fce4_56145090_167f87a2,
    0x271f3358_5ab81521_064a853a_22132791, 0x270103b9_9fa58c32_a481cbef_87d0d12a,
    0x26e2e394_9bc61fe7_cb5734a9_ef277cdc, 0x26c4d2e8_e4389e0b_b71e6a97_ac596bc3,
    0x26a6d1b6_069811cf_ea59d3f2_98384942, 0x2688dffb_88fff692_5928c7e0_42b66032,
    0x266afdb8_ea106ff8_1be64a53_34b09c48, 0x264d2aed_a0f28754_a553d5f7_df36f45c,
    0x262f6799_1d5c6e55_74dcd574_d521fe78, 0x2611b3ba_c795c6ea_39c08708_5bd0c84b,
    0x25f40f52_007bf061_58411f0c_fb7a0685, 0x25d67a5e_218659b0_be58163f_aa10da5a,
    0x25b8f4de_7ccad8e2_f1e0a6b5_270e77e6, 0x259b7ed2_5d0207a0_3eaa8d0e_6f753e2b,
    0x257e1839_058ba4cb_e7783157_d5ae4ed8, 0x2560c111_b272fb2d_398c629a_0466da84,
    0x2543795b_98734d1c_5f1ccfe3_a6a0520a, 0x25264115_e4fc452a_c9bf5fb6_2cd5b6c1,
    0x2509183f_be366bbf_0ab97165_cbfa7fce, 0x24ebfed8_4307a19b_ebf8f11f_1c441d55,
    0x24cef4de_8b179f4a_996ff4bb_a01febe1, 0x24b1fa51_a6d4795f_a78c530f_3bfa0e2b,
    0x24950f30_9f772992_c0954e75_f1b36008, 0x2478337a_77081ca0_bfd9fb93_32e89537,
    0x245b672e_2863c4ef_fecb83b8_98238f07, 0x243eaa4a_a73f31ee_955ebc74_36f27229,
    0x2421fcce_e02cac22_4c60c860_6ec07f00, 0x24055eb9_b8a055e1_fdca8d5e_f9b2b0eb,
    0x23e8d00a_0ef4d0b0_1c8ebeb4_7f9d8043, 0x23cc50be_ba6fe72e_1ade02a4_11ec9129,
    0x23afe0d6_8b473ba0_636c57b4_47b02f18, 0x23938050_4aa4fafa_97e24a11_e69c0ac6,
    0x23772f2a_baac946b_c453c1cc_475f8a09, 0x235aed64_967f7562_3555330a_9cc31b50,
    0x233ebafc_9241c9fe_9c16bdd2_411a2b8b, 0x232297f1_5b1f41ee_29cb4f5f_35015460,
    0x23068441_974fd9a3_49901721_edf13fe0, 0x22ea7feb_e61ca7e4_9e0698c8_49364fe2,
    0x22ce8aee_dfe4afa9_e5e14ec1_d9030011, 0x22b2a549_1621b63e_68c028c7_e5d4fbea,
    0x2296cef9_136d1da0_8be7334c_cb9d2ad0, 0x227b07fd_5b84c316_2c965a69_a0502e78,
    0x225f5054_6b4fe1ed_5c157fe0_aa036d8b, 0x2243a7fc_b8e3fa61_17e3faeb_1636ff22,
    0x22280ef4_b389bc99_96e60c7c_692cd71e, 0x220c853a_c3c1f7bf_c2e5d601_e6fb7ea6,
    0x21f10acd_4b4a8d1b_7447eddb_786d67ea, 0x21d59faa_a5236734_046dbe32_17791d9f,
    0x21ba43d1_259374ea_c9e96a99_b97834ca, 0x219ef73f_1a2da887_1060012e_730eea07,
    0x2183b9f2_c9d5faab_1cbf368b_31a7017a, 0x21688bea_74c67129_cd43d2e9_839b9f6f,
    0x214d6d24_549429b4_63b543a3_eb2bb579, 0x21325d9e_9c346858_073170ce_6fd8c65c,
    0x21175d57_7801a9c2_89e9fc1b_e4a45247, 0x20fc6c4d_0dc0b945_fe49662b_27b5ffed,
    0x20e18a7d_7ca5ca92_a61b3ad9_44b4d116, 0x20c6b7e6_dd59971e_c5864d70_17574b18,
    0x20abf487_41fe7f33_e2eb337a_980bfc04, 0x2091405c_b635ae98_fc0b898f_dc4788b3,
    0x20769b65_3f2444d1_38401945_578f95f1, 0x205c059e_db7880e6_9ef4ab53_5add5f7a,
    0x20417f07_836ef0b8_59202551_92792763, 0x2027079d_28d7a3c4_03fe7fb3_fb9298ce,
    0x200c9f5d_b71b6161_9af01f25_82a2ff8f, 0x1ff24647_1340e269_7e0f2430_c1a9bc2b,
    0x1fd7fc57_1bf20e3c_1ac74d68_650ac0ce, 0x1fbdc18b_a9813b22_bb880ae1_a333e15f,
    0x1fa395e2_8dee7201_038255a8_ef6a4a7c, 0x1f897959_94ecb54e_9b4cba9b_beca0e70,
    0x1f6f6bee_83e74b50_933fc55d_32b9f134, 0x1f556d9f_1a070b8a_00638d6d_86161372,
    0x1f3b7e69_1037af5b_58dc8c27_7d21863f, 0x1f219e4a_192d25c8_14ea0dd1_cfa97161,
    0x1f07cd3f_e168ea5a_19bb7936_634f6d1b, 0x1eee0b48_0f3f5f1a_73a3475c_01909609,
    0x1ed45860_42dd2996_e57ecf02_f58f124a, 0x1ebab486_164c92eb_d388f437_e741cdb7,
    0x1ea11fb7_1d7aeaca_103b526d_0c7ae7c6, 0x1e8799f0_e63ded70_125d8daf_ad0aa20e,
    0x1e6e2330_f8592c8e_1bed1443_07401ad0, 0x1e54bb74_d5837b0c_da20b392_ce2a0fe5,
    0x1e3b62b9_f96c5bae_0772f05c_c3f2c80d, 0x1e2218fd_d9c1727e_99540855_90ecd6a8,
    0x1e08de3d_e633f912_03e8d981_83b9e913, 0x1defb277_887e357e_1f0e96fc_810d6f18,
    0x1dd695a8_2468f40f_38bc29e0_e384935e, 0x1dbd87cd_17d103ab_e1c9552d_1133e804,
    0x1da488e3_baacb4e0_032122a2_cae0afea, 0x1d8b98e9_5f115b86_ca70ba37_8a35c04e,
    0x1d72b7db_5138d30a_fe7d8346_d7a57bb2, 0x1d59e5b6_d7870535_4c7543b1_03c759a5,
    0x1d412279_328f7380_20c0d2b3_78ee6872, 0x1d286e1f_9d1ac2e8_9f25d8c4_10ceb970,
    0x1d0fc8a7_4c2c4a34_4f55f025_a3ec9827, 0x1cf7320d_6f07a2a3_14694047_b0660f0b,
    0x1cdeaa4f_2f363b05_07305533_1774411c, 0x1cc63169_b08ced2b_ccc47117_a43afd4b,
    0x1cadc75a_113195af_0446dd36_10b9123b, 0x1c956c1d_69a0adfb_6856c57d_1d840589,
    0x1c7d1fb0_ccb2e8a4_4269e3c2_990edb47, 0x1c64e211_47a2cfee_cfe6a0f7_9565a8df,
    0x1c4cb33b_e212668f_3a9e5066_8bec4e2b, 0x1c34932d_9e10ca8e_c813b730_503df678,
    0x1c1c81e3_781fda52_e4d524ff_a1e2d946, 0x1c047f5a_6739dbbc_b319ee59_e9c6aa74,
    0x1bec8b8f_5cd72558_c5c91106_3f255946, 0x1bd4a67f_44f3c996_b312239b_6074f4b6,
    0x1bbcd027_06154400_2bd25e2c_69c751e2, 0x1ba50883_81502867_471d7ef6_cb56d1e5,
    0x1b8d4f91_924dd403_b36d7e80_1b136a82, 0x1b75a54e_0f522076_81346647_74d33fcb,
    0x1b5e09b5_c94118ac_3cd11f7d_e3e671f5, 0x1b467cc5_8ba4af95_103aa77f_ac984117,
    0x1b2efe7a_1cb278aa_a714b94b_88be8525, 0x1b178ed0_3d51623b_924d9925_e6d7a679,
    0x1b002dc4_a91f7173_eade3d10_9676ef1e, 0x1ae8db54_1677801a_f5cc7cc9_9370705b,
    0x1ad1977b_3676fbfd_8e22398f_7adda846, 0x1aba6236_b503a7fd_1c2c7bd4_91c2b547,
    0x1aa33b83_38d15eba_e4024e1a_8b20e625, 0x1a8c235d_6367d6d7_780c931d_74fe3032,
    0x1a7519c1_d12868be_1f0e2cdb_3db40e6d, 0x1a5e1ead_1953d5f3_fffe7472_f90f5e22,
    0x1a47321b_ce1011e2_e8e732c3_79eb77f7, 0x1a30540a_7c6e0c17_88e2f180_5fd5fa4d,
    0x1a198475_ac6f7bea_f8508e78_5275998a, 0x1a02c359_e10cad8f_6d55693c_788520dc,
    0x19ec10b3_983a5077_fdd8406a_d870cdbb, 0x19d56c7f_4aef4713_533bd1a2_e57941cb,
    0x19bed6b9_6d2a77d1_37497fa9_f3045775, 0x19a84f5e_6df89f6a_e4f1976f_017d57ef,
    0x1991d66a_b77a2466_0ac83852_585f3c4a, 0x197b6bda_aee8ebca_70735823_7cc07ce0,
    0x19650faa_b49e2f02_3397c96b_20785568, 0x194ec1d7_241852dc_94388478_a8cd0efb,
    0x1938825c_5400bfab_4becaae4_485c1b7a, 0x19225136_9631ba72_6ecdc34e_5065547a,
    0x190c2e62_37bc3f22_d8887190_00ea5599, 0x18f619db_80eddbd7_2b8e67b6_58eb4cf2,
    0x18e0139e_b5568d0b_6c08674f_f04f5b02, 0x18ca1ba8_13ce9ac7_43d2da16_bf2d7074,
    0x18b431f3_d67c76b3_0086be00_60d2c432, 0x189e567e_32da9b0f_60534c65_05746137,
    0x18888943_59bd6a88_463ad748_e7ccab88, 0x1872ca3f_775910da_721ec3e7_ca04753d,
    0x185d196e_b3476444_5ceb3f5f_ff2dfb2e, 0x184776cd_308dc7ba_5d233aa5_8e0ade37,
    0x1831e257_0da30dd6_3c085691_523ef4fe, 0x181c5c08_64755c7a_67a0a0af_bf6aa732,
    0x1806e3dd_4a701120_f1ed461c_1c6ede69, 0x17f179d1_d081a5ce_91c1a3dd_ec53d985,
    0x17dc1de2_032196a1_ddd14c7e_577f74f8, 0x17c6d009_ea5647f6_febda96b_de3e467a,
    0x17b19045_89baed18_1928bcbe_41f9029d, 0x179c5e90_e0856f72_b51a2570_23758b63,
    0x17873ae7_e98c564a_6c55d58e_2ae59342, 0x17722546_9b4caee1_2da0d77d_cd1b1665,
    0x175d1da8_e7eff50d_6757fd9b_853a6d9c, 0x1748240a_bd51fc36_702e563f_eb774101,
    0x17333868_0506d8af_8965ade5_92776077, 0x171e5abc_a460c969_da5a39cb_339644fa,
    0x17098b04_7c7621f5_c9cba715_d78ca89c, 0x16f4c93b_6a2734cc_1de92d28_29ae1067,
    0x16e0155d_46243dd7_50cbd595_70b02a4f, 0x16cb6f65_e4f34d35_8bb9e0b1_fdb157c0,
    0x16b6d751_16f6322b_c047f326_7a6cbec1, 0x16a24d1a_a8706642_5b307ee9_c08e2793,
    0x168dd0be_618cf884_11879064_91648f65, 0x16796238_066478d7_4dc8befe_efbea710,
    0x16650183_5702e36a_c71e66a0_144651bd, 0x1650ae9c_0f6d8c2d_d22c7564_f408ae25,
    0x163c697d_e7a90a4c_ff9ded98_342d997b, 0x16283224_93bf23ab_a1b2af58_9707033f,
    0x1614088b_c3c4b852_d7131edd_5651ecc2, 0x15ffecaf_23dfadce_be40bb65_14a623e5,
    0x15ebde8a_5c4cda72_7a15a704_8bf1e80c, 0x15d7de19_1165f07b_b4e96824_6763d605,
    0x15c3eb56_e3a7690e_551ec1e6_930697c2, 0x15b0063f_6fb66f01_1b155035_f1406743,
    0x159c2ece_4e66c973_e5b98e39_ad35e878, 0x158864ff_14c0c628_60370187_efcbd446,
    0x1574a8cd_54072395_e0a260fa_3b11d7f7, 0x1560fa34_99bcfab1_44cca29e_f50aa3de,
    0x154d5930_6faba861_9fd3d815_ef3a314b, 0x1539c5bc_5be8b69a_907392ce_c4ba27ff,
    0x15263fd3_e0dbc515_1d8c2135_45bbab26, 0x1512c772_7d44719f_fbd641e7_4e8524cd,
    0x14ff5c93_ac404000_253fd99d_f26fa934, 0x14ebff32_e550815a_affdba7f_ba68912a,
    0x14d8af4b_9c603b20_d8f68f11_42fe1c0a, 0x14c56cd9_41ca0d77_3acb6edb_e0672511,
    0x14b237d7_425e1911_306b760f_0ec9b964, 0x149f1041_0767e479_67d0daba_60832d8c,
    0x148bf611_f6b440c0_af3f589c_97ed3468, 0x1478e945_72972d8c_0d1d56bd_586ed153,
    0x1465e9d6_d9f1bc7b_384acee6_ab3b6d97, 0x1452f7c1_8837f3e0_8caaad61_93450ee0,
    0x14401300_d576b0c3_9d6d05d6_31e5aaf4, 0x142d3b90_16598827_8c8a0797_ce2d5bda,
    0x141a716a_9c30a78e_54c6fead_099a5b9e, 0x1407b48b_b4f6b4b2_398fd63c_d5dbdf44,
    0x13f504ee_ab56ac6e_95e86b5c_385dd6a7, 0x13e2628e_c6b1c0d1_49b97b2d_59954d20,
    0x13cfcd67_4b25364e_0ac50376_a5c142af, 0x13bd4573_7990400c_e49d77ed_06d72f11,
    0x13aacaae_8f99db4d_391226f6_13829c06, 0x13985d13_c7b6a9d6_98a17d39_b02fd12f,
    0x1385fc9e_592ecb70_d0a77685_1923933c, 0x1373a949_7823b65c_932b62ce_aba6bf89,
    0x13616310_55960ec6_22642621_42a1d096, 0x134f29ee_1f6b7d2b_7045305b_2faa1fb7,
    0x133cfdde_007483af_28a8847f_e6623094, 0x132adedb_20725252_22f33559_3021296a,
    0x1318cce0_a41c9a0c_be61acc6_f3356a2d, 0x1306c7e9_ad275ec1_b27fd2da_1af38516,
    0x12f4cff1_5a48c803_e3aea824_16433f82, 0x12e2e4f2_c73ef0a8_d1fd11f2_3c5f186a,
    0x12d106e9_0cd5b521_3f045dea_5c4433b3, 0x12bf35cf_40ec8091_adea5318_c019f262,
    0x12ad71a0_767c18a4_67226f62_f146b5c0, 0x129bba57_bd9c680e_b0061fe6_a165165c,
    0x128a0ff0_238a47c2_ece04778_b14a0f02, 0x12787264_b2ad46c9_6a932ea3_4c611b52,
    0x1266e1b0_729d70b9_9390f290_0c955804, 0x12555dce_682912cd_5a75a29f_8dac6875,
    0x1243e6b9_955a7f88_ab2f656d_3a232103, 0x12327c6c_f97dd0ee_ba442406_1f9870c1,
    0x12211ee3_9126a93f_106d4b8d_4f1613b9, 0x120fce18_5635f234_377120c8_551826ba,
    0x11fe8a06_3fdf9abd_f3d5d47b_07011de4, 0x11ed52a8_42b05330_fdc4f173_7eb1cf08,
    0x11dc27f9_509347e6_3235cc0d_f270e5e1, 0x11cb09f4_58d7da43_3c3b3d2c_b6704917,
    0x11b9f894_48375826_bd1c1684_1742fc27, 0x11a8f3d4_08dab1b2_00ae520d_7046d72d,
    0x1197fbae_82602d6a_5242f0db_36575e72, 0x1187101e_99e11aac_0d4bbcc3_e29a7b3b,
    0x1176311f_31f78269_8bc49ad0_0f424c2c, 0x11655eab_2ac3d630_1b4fc06e_48215ddf,
    0x115498bd_61f29d6d_28ded98c_1056f1bb, 0x1143df50_b2c220ed_d9b2f040_0b7b0db7,
    0x1133325f_f6081493_4f719e17_758125db, 0x112291e6_02373f35_dc07a9c5_712d92b4,
    0x1111fddd_ab6520b1_710fa053_9a465bf5, 0x11017641_c34f9615_9d762579_625f2396,
    0x10f0fb0d_19627bf3_731d91de_261fd340, 0x10e08c3a_7abd4ec3_b54eee36_4d257e6f,
    0x10d029c4_b238c95f_b7d75dde_99079b3f, 0x10bfd3a6_886c8187_5dc6894d_6432733a,
    0x10af89da_c3b4826e_addc7ee6_66ed8deb, 0x109f4c5c_2836e54d_79d3bdf4_5562c5e9,
    0x108f1b25_77e967eb_9cd6a249_60fb7e01, 0x107ef631_72970124_5c961dd4_fdfd52eb,
    0x106edd7a_d5e5735b_7fa286e6_a0d7710c, 0x105ed0fc_5d5adcde_b2d62c6a_b380845b,
    0x104ed0b0_c263462d_ded44bc5_1338fd9e, 0x103edc92_bc562e25_15d5dc9b_75359ffd,
    0x102ef49d_007c1402_c9385c86_f3388d02, 0x101f18ca_4213ff44_fd8145e0_1101253a,
    0x100f4915_32590558_3acb1851_ccb26a1d, 0x0fff8578_8087cd12_fed6be41_957d1fba,
    0x0fefcdee_d9e40ff8_7d459613_25e4159f, 0x0fe02272_e9be193d_81cd6895_2c6c4688,
    0x0fd082ff_5978428a_4f880d30_a200488e, 0x0fc0ef8e_d08c6e74_5fd45788_544d4786,
    0x0fb1681b_f49180aa_ea9517d5_c6635fa3, 0x0fa1eca1_6940d3d1_28f56647_1b0f4a4f,
    0x0f927d19_d07bad01_4b3710c0_27101808, 0x0f83197f_ca50acf3_2170c07d_fc64f4c0,
    0x0f73c1cd_f5013ec1_7e853915_5b2516fd, 0x0f6475fe_ed070449_6403dafc_ee1e9c1b,
    0x0f55360d_4d19401e_0d0c4836_04eaf7b6, 0x0f4601f3_ae323d0c_f5bb98a2_2f939995,
    0x0f36d9ac_a794b32d_0418e421_165015fc, 0x0f27bd32_ced12a73_fee8f9ae_6c5ccf3e,
    0x0f18ac80_b7cb5acd_8645d369_4b7c395e, 0x0f09a790_f4bf89ae_c94da6c1_3173b389,
    0x0efaae5e_1647e522_3bb7450d_307b9cc0, 0x0eebc0e2_ab61dc46_9595caab_16172877,
    0x0edcdf19_4173753c_6f144891_6c9047e5, 0x0ece08fc_6450a07d_d173152b_26844dd8,
    0x0ebf3e86_9e40899b_1e13b491_423e2935, 0x0eb07fb2_7802e558_b3e5bd00_9d1b902e,
    0x0ea1cc7a_78d53d28_c30eb203_92e1a9ff, 0x0e9324d9_267837fc_c630767b_45eae098,
    0x0e8488c9_0534e06a_203d9ad7_6a1a9152, 0x0e75f844_97e1e81d_655860b9_a1826d14,
    0x0e677346_5fe8e897_dcc8bf60_22bebdd7, 0x0e58f9c8_dd4ba132_d1a6f3f0_9d0f938e,
    0x0e4a8bc6_8ea93264_4f6b258f_40f41b26, 0x0e3c2939_f1435640_ef274e96_c8934e01,
    0x0e2dd21d_81039636_61c6e1ce_e5b63de7, 0x0e1f866b_b8807dfa_6b4773b9_9a940ce1,
    0x0e11461f_1102cbaa_0a76fc9a_42aaec74, 0x0e031132_028a9d14_905eff58_aa9bbbc6,
    0x0df4e79f_03d49a2e_721ff387_91997761, 0x0de6c960_8a5f1ca7_a79dad5a_446b3173,
    0x0dd8b671_0a6f54a1_70fc14fc_b9b2fe03, 0x0dcaaeca_f7166a7f_648b3f5a_ea9e17e4,
    0x0dbcb268_c2369dcf_ae62d4c7_9d182cfa, 0x0daec144_dc886146_728e9603_713c89b9,
    0x0da0db59_b59f73c8_4a50add0_507251a2, 0x0d9300a1_bbeff67f_dca2447b_97b1f43b,
    0x0d853117_5cd37ffa_99bf6b9d_8e8528f2, 0x0d776cb5_048e2c48_a930e2c4_ef9b9c3c,
    0x0d69b375_1e53aa1c_216c59fa_831339da, 0x0d5c0552_144c44e3_a7caa51f_47f7387b,
    0x0d4e6246_4f99ebdc_9f3abb4e_f0114f85, 0x0d40ca4c_385d3619_13c04fe3_6f5643f0,
    0x0d333d5e_35ba6375_98753fbb_8fcc9156, 0x0d25bb76_adde5a7b_556de54f_faf8927f,
    0x0d184490_0603a32a_8a89994d_dddd0838, 0x0d0ad8a4_a2775ea9_d3e22445_f9451daf,
    0x0cfd77ae_e69e3bd6_8436a0f8_58f0e623, 0x0cf021a9_34f968b2_71583661_f0d2bdb7,
    0x0ce2d68d_ef2b80ab_96491580_17f15906, 0x0cd59657_75fd77b9_f6683958_b218c3fb,
    0x0cc86100_29638250_34ae78e3_b34f128f, 0x0cbb3682_6881fa1b_59ab7aa6_eecabd87,
    0x0cae16d8_91b23f8e_4a9af9ef_ed6f3e7a, 0x0ca101fd_02879835_7b947e65_b17de77e,
    0x0c93f7ea_17d409cf_6e811907_92fa58e0, 0x0c86f89a_2dad3226_982bde7d_7b1f600e,
    0x0c7a0407_9f711ba9_4c6a9ed4_85326af3, 0x0c6d1a2c_c7cb0ebc_5a04b762_71ffe500,
    0x0c603b04_00b85fc5_06a5bda0_b7c82078, 0x0c536687_a38d39e7_22d11a78_ffaf0389,
    0x0c469cb2_08f96673_f5726de1_ca163939, 0x0c39dd7d_890d1106_c64cac01_8dba7280,
    0x0c2d28e4_7b3d884b_d62f489d_7781a3e6, 0x0c207ee1_3669fb6e_9b7d64b1_4e0fef14,
    0x0c13df6e_10e0342c_2136be10_1ef5e520, 0x0c074a85_60614d86_6e550b47_7e2a5bfc,
    0x0bfac021_7a266715_e2f2682d_96d64e8f, 0x0bee403c_b2e554f5_804e730f_9ad81a52,
    0x0be1cad1_5ed54c47_1867a8fb_12ea500b, 0x0bd55fd9_d1b38c4c_697d62c0_5bb64f42,
    0x0bc8ff50_5ec80412_316c7dc4_e55579c3, 0x0bbca92f_58e9f4aa_4c752d4c_ccd3d198,
    0x0bb05d71_12848ff1_fa939c60_0465e374, 0x0ba41c0f_dd9b93e1_6e2edfb9_18c7e43a,
    0x0b97e506_0bcfe261_ce7a2c33_3074ce73, 0x0b8bb84d_ee6415a6_df7b4af1_88bdca38,
    0x0b7f95e1_d6411109_893ecb0a_dd31848a, 0x0b737dbc_13fa8e60_7f566afc_5090df03,
    0x0b676fd6_f7d3a7d4_515094b6_4c73f8a8, 0x0b5b6c2c_d1c35e2c_34687ff6_537baf09,
    0x0b4f72b7_f1791b90_de3d921e_41b3811d, 0x0b438372_a66132c2_cfedd32e_af91ae32,
    0x0b379e57_3fa95ac1_787abf61_6277de7a, 0x0b2bc360_0c4526e0_9ce94e93_c7d2fbba,
    0x0b1ff287_5af27b49_7c15b0c9_f2134887, 0x0b142bc7_7a3dfde5_2bb8ec29_bf046a3d,
    0x0b086f1a_b88783ad_b3a22f8c_da30f7ef, 0x0afcbc7b_64067a63_73a73fe8_42b032ff,
    0x0af113e3_cace4ea4_684ed911_e6637c58, 0x0ae5754e_3ad2ce62_e9b51eb9_e2a843d4,
    0x0ad9e0b5_01ec87b9_87a543a6_4d5721c1, 0x0ace5612_6ddd2419_ad5c4e5f_89020720,
    0x0ac2d560_cc53bfd2_bedf4e89_d6c596ff, 0x0ab75e9a_6af13def_69436041_34a5fcf7,
    0x0aabf1b9_974c9866_e6b77619_2d6a81e0, 0x0aa08eb8_9ef72c9f_fe8f021e_1a55bcab,
    0x0a953591_cf810443_90f92dac_15bc6612, 0x0a89e63f_767d1a5c_857a527d_c044f05d,
    0x0a7ea0bb_e1859cc2_faa4c866_f6c3fbc4, 0x0a736501_5e4029d0_9cf2ce43_66bd4f05,
    0x0a68330a_3a620a5c_12054d45_2419455e, 0x0a5d0ad0_c3b467f9_6cea67a3_72a71ca6,
    0x0a51ec4f_48187f7d_a76b225e_4f593c2b, 0x0a46d780_158bcfc3_23b8f921_5c599a41,
    0x0a3bcc5d_7a2c44ad_412abf1b_333d167b, 0x0a30cae1_c43c5e69_160bcbc0_7aeda25a,
    0x0a25d307_422754e9_67d10ae1_59f0458b, 0x0a1ae4c8_4285379c_0255103a_247da0ad,
    0x0a10001f_141f0956_9606bbd4_f6cab727, 0x0a052506_05f2d879_4c3d4252_270ec79a,
    0x09fa5377_6737d345_48287ebb_70b8e412, 0x09ef8b6d_87625865_5215472d_39afe41b,
    0x09e4cce2_b62803a6_f1fb06bf_b66b25e0, 0x09da17d1_4383b6e2_4582121d_ef21b170,
    0x09cf6c33_7fb99f0e_e4e8fda3_5b76982a, 0x09c4ca03_bb5b3584_3162a03c_43a94a4b,
    0x09ba313c_474b3d63_6eb65a45_6892d5ad, 0x09afa1d7_74c1bd2a_11189ffa_7eee4356,
    0x09a51bcf_954ff46a_af5aa070_8981c28d, 0x099a9f1e_fae44dab_10b5217a_b283325c,
    0x09902bbf_f7ce4c65_d4944319_83adae92, 0x0985c1ac_dec2772e_39e7c732_d93b1c2a,
    0x097b60e0_02de3df4_9295a95c_43cd7e13, 0x09710953_b7abdc69_f6c33b9b_733c9577,
    0x0966bb02_51263881_d2bb955c_8bb72095, 0x095c75e6_23bcbd0f_f148dec2_ee9aa74c,
    0x095239f9_84573081_ab60d93e_3db7c374, 0x09480736_c85987b0_ed0bec5d_a7b19316,
    0x093ddd98_45a7b4cf_c670e8b3_9e903621, 0x0933bd18_52a9726b_46ee97cb_0ab0316b,
    0x0929a5b1_464e0a84_67270556_4e475c25, 0x091f975d_781019bd_cdd72893_daa674d7,
    0x09159217_3ff94e9d_42482b29_fad651d6, 0x090b95d8_f6a624df_a615f24c_939e94bd,
    0x0901a29c_f5499cde_56f0bdc7_365e0729, 0x08f7b85d_95b0ef04_dfe59c81_d464aa81,
    0x08edd715_32473b55_e89b1557_0912bb24, 0x08e3febe_261934fe_57ccabbb_52aa23b4,
    0x08da2f52_ccd8c9f5_a528cffa_50932f7f, 0x08d068cd_82e0c6aa_5d8948fa_88c83c22,
    0x08c6ab28_a53875b9_e34e2fe4_4e6db799, 0x08bcf65e_91973bb2_7b6f2322_e3fd4d81,
    0x08b34a69_a6682ede_be9d5c80_56f0bba6, 0x08a9a744_42cdab19_8c93cc28_1baf3289,
    0x08a00ce8_c6a4e1a9_a67036d0_2e69d97f, 0x08967b51_92896524_1ba98edd_542c42d9,
    0x088cf279_07d8b154_bbec4dd8_c42a2efa, 0x08837259_88b5af2b_c6d56bda_a17603ca,
    0x0879faed_780c34b0_192fac96_c346a430, 0x08708c2f_399480f5_1dfd4c84_c2ece144,
    0x08672619_31d6b413_d0399b40_7f848b19, 0x085dc8a5_c62e4326_20dab9e7_91fb178d,
    0x085473cf_5ccd6844_1b337c1f_d3563b9c, 0x084b2790_5cc08e82_286847eb_64447c60,
    0x0841e3e3_2df1b9ef_d937bada_e32dcaf8, 0x0838a8c2_392beb96_a3e0ca04_feabe512,
    0x082f7627_e81e8178_0a73fcf4_b1128840, 0x08264c0e_a560928a_a45c4219_97b38377,
    0x081d2a70_dc7446b5_8c65a4df_8017a138, 0x08141148_f9ca2ac9_bafcda2d_fcfdcc82,
    0x080b0091_6ac48078_dad21f84_424b18ba, 0x0801f844_9dba8a49_2c744319_69d740a6,
    0x07f8f85d_01fbd386_13ddd059_77497168, 0x07f000d5_07d3742c_f14e43d2_f1f21e8a,
    0x07e711a7_208b50d5_ed23cc51_d4853b87, 0x07de2acd_be6f5698_64bf74b0_2260ffe6,
    0x07d54c43_54d0b2ea_accd931b_0bb17ecb, 0x07cc7602_5809077c_e396ff88_b6360dc1,
    0x07c3a805_3d7d9a0e_9444d44d_2fd544ba, 0x07bae246_7ba2803e_f24051a6_9ae2c763,
    0x07b224c0_89fdc757_7a12e04e_4b697a28, 0x07a96f6d_e12a9810_cb5f1846_7c0f59ea,
    0x07a0c248_fadc5651_95bb18f5_cd73134b, 0x07981d4c_51e1bce7_785e5ef9_6bbd6fe0,
    0x078f8072_6227f539_bab993ce_2563bb99, 0x0786ebb5_a8bdaaf5_ca2d8c7c_c7beacf1,
    0x077e5f10_a3d61bb5_6f2fc7de_b7d65596, 0x0775da7d_d2cc229e_b23e33f0_1e67bb60,
    0x076d5df7_b6253ffd_6f11cd2b_6cd2380c, 0x0764e978_cf949cd6_9a87c457_f3b230f2,
    0x075c7cfb_a1fe0a75_45bb37df_57efe92b, 0x0754187a_b178fdf1_6ec62f0b_a918ae41,
    0x074bbbf0_835387b0_b59760fc_98260b46, 0x07436757_9e1546e1_113b603b_d5cc0e1e,
    0x073b1aaa_898258ed_a7e30040_17a5f021, 0x0732d5e3_ce9e44ed_f1d62d97_edc16991,
    0x072a98fd_f7aee30f_5561f5a8_ca56d834, 0x072263f3_903f3ff9_6faa19c5_d8273df8,
    0x071a36bf_25227c2d_441a3ccb_026a5962, 0x0712115b_4476a75f_92007c63_7f0b3037,
    0x0709f3c2_7da797ce_95a311c3_ebc826bd, 0x0701ddef_6171bd93_7fe4630d_56e74f83,
    0x06f9cfdc_81e4f1ef_f544b902_1ae264b1, 0x06f1c984_72674297_eac68e7c_0c578f90,
    0x06e9cae1_c7b7b8f8_3cea228c_dda655c5, 0x06e1d3ef_17f11d7a_629e95d0_8b1a35ef,
    0x06d9e4a6_fa8cb6c5_a3aa61c3_d4701790, 0x06d1fd04_086504fe_3faa607e_e7500f23,
    0x06ca1d00_dbb87902_f85ddeb2_031bc12e, 0x06c24498_102c27a9_77874bed_8c13c6d1,
    0x06ba73c4_42ce78fa_0e3408ea_21e9a60c, 0x06b2aa80_1219d36b_50c28b94_23619f66,
    0x06aae8c6_1df7431e_187c9007_b6bcc1ff, 0x06a32e91_07c11d1a_79134f78_eab2747c,
    0x069b7bdb_72459e8e_3dbdb553_91d33f76, 0x0693d0a0_01c9880d_872442df_a6ecec6a,
    0x068c2cd9_5c0ab4d6_28abbdab_a38e9f56, 0x06849082_2842ae16_690ee03b_4555d730,
    0x067cfb95_0f293a37_cf900a66_8c11f8cd, 0x06756e0c_baf6e82e_ac5e5aec_b1ccda08,
    0x066de7e3_d76796cf_1015a98e_96330923, 0x06666915_11bcf827_eb86842b_49818dd5,
    0x065ef19b_18c110e5_1632958a_62a9c70e, 0x06578170_9cc8b3b8_ff22b57f_7dd3c883,
    0x06501890_4fb5f8ce_d0ee4bb8_13b71dd2, 0x0648b6f4_e4fab145_d6f7a4ba_c278964c,
    0x06415c99_119ad6b6_f7065761_8c29161e, 0x063a0977_8c2ef6c5_1787dc76_5f2501fa,
    0x0632bd8b_0ce69ab9_4fd6fe33_bde32be3, 0x062b78ce_4d8aab2b_c4fcc676_3d439cc7,
    0x06243b3c_097fcfba_1a690cac_db2a68a7, 0x061d04ce_fdc8cacc_6325b466_3d79d74e,
    0x0615d581_e908d169_85060f22_5e086529, 0x060ead4f_8b85df1c_044ba44f_e50aeed0,
    0x06078c32_a72b05e8_332adda1_90ce6f29, 0x06007225_ff8aba54_c584b8d3_cc81a62e,
    0x05f95f24_59e11b86_ce0ea740_686f3f2a, 0x05f25328_7d163772_2eff2c03_c62da6a0,
    0x05eb4e2d_31c04b1f_8d2c8fd3_4c73ccea, 0x05e4502d_4225ff08_d95b22e2_2fab78af,
    0x05dd5923_7a409f8d_8841fe4b_20ce5c1b, 0x05d6690a_a7be517f_96900478_c7aa6f3e,
    0x05cf7fdd_9a0442ca_7af70013_7b324d6d, 0x05c89d97_2230d735_2cf83041_b9105143,
    0x05c1c232_131dd140_6bdc4ccd_85d0062a, 0x05baeda9_41627722_75e91257_ffa20654,
    0x05b41ff7_8355b3e1_6487b394_a18470c1, 0x05ad5917_b110348d_66aa1e07_463cbba3,
    0x05a69904_a46e819c_1750d47c_d9c12c9b, 0x059fdfb9_39131466_32a0350a_5d8ff620,
    0x05992d30_4c6868c8_f07a5175_87e893c7, 0x05928164_bda30aec_50120d44_6fd3ade6,
    0x058bdc51_6dc3a12f_a464fa1e_775e095b, 0x05853df1_3f98f23d_b5fb6789_736869d5,
    0x057ea63f_17c1e749_d2b94c55_c3c6afce, 0x05781535_dcaf8a77_28ef143e_cf6bc0e6,
    0x05718ad0_76a7016b_cf36f178_945d7680, 0x056b0709_cfc38410_df02163d_57d5dad1,
    0x056489dc_d3f84f81_0c092c27_d1a20ce2, 0x055e1344_71129527_271c7c87_5e9088e5,
    0x0557a33b_96bb660d_ff12843e_da6a4544, 0x055139bd_36799a63_16cf1d8e_c0ed0957,
    0x054ad6c4_43b3b52d_ab9200e4_1c426c1f, 0x05447a4b_b3b1c43b_8ae919f4_7e1e83a1,
    0x053e244e_7d9f3c45_3bca0eb1_8b0a918a, 0x0537d4c7_9a8cd14b_027658a3_10170632,
    0x05318bb2_05724b2c_4ae675bc_85e45558, 0x052b4908_bb30567b_098afa9a_4f43fc36,
    0x05250cc6_ba92518c_a63db41c_993b5109, 0x051ed6e7_045015ca_09418882_c857d88e,
    0x0518a764_9b0fbd40_662d677c_9ef79891, 0x05127e3a_83676474_64955430_0676277d,
    0x050c5b63_c3dee879_4a346b16_52c31053, 0x05063edb_64f1a14d_ce43b705_026112a7,
    0x0500289c_71101880_418bb3f7_c0077714, 0x04fa18a1_f4a1bc1b_ba998297_6245d927,
    0x04f40ee6_fe068ddf_f9550c67_9c28c69e, 0x04ee0b66_9d98cec5_b902ad6e_f4bcfda0,
    0x04e80e1b_e5aea6d1_2b816496_69457a71, 0x04e21701_ea9bc934_5c560f7b_d893d055,
    0x04dc2613_c2b314c3_3dccd0a7_f209d8e8, 0x04d63b4c_864830bb_262b6fb9_b8f5be78,
    0x04d056a7_4fb125df_869a49ea_69e461f5, 0x04ca781f_3b47f3ed_a90d4620_24379403,
    0x04c49faf_676c2369_4613327f_4c454b33, 0x04becd52_f48453c3_c707f9fc_f385afb9,
    0x04b90105_04ffc5e0_0cb53ee2_13538dfa, 0x04b33ac0_bd57e2f4_95f51b89_ee3717d2,
    0x04ad7a81_4411bfcd_e56c150e_d2574639, 0x04a7c041_c1bf9c73_08e9ac40_77dce3ba,
    0x04a20bfd_6102602e_28727066_5d4dea5f, 0x049c5daf_4e8b11fb_06630546_224a274b,
    0x0496b552_b91c4d5d_5d813308_78a1ea33, 0x049112e2_d18bb3a1_0d2ed354_77aeb8c2,
    0x048b765a_cac35986_074a43cd_a1a6f679, 0x0485dfb5_d9c33159_f698f398_7139248e,
    0x04804eef_35a27181_97e2a83e_7047c12d, 0x047ac402_1790f773_c32736e7_258e30d0,
    0x04753ee9_bad8a728_2594aa16_e0b098ae, 0x046fbfa1_5cdec6fb_b01922c6_97d1eeea,
    0x046a4624_3d25580c_c19a3686_55a4d7bc, 0x0464d26d_9d4c6b11_17031c5a_69352e18,
    0x045f6478_c11371a7_8e7ba815_6dd12fe7, 0x0459fc40_ee5a8c27_ce33e117_9a8c7b3d,
    0x045499c1_6d23d3f1_e242eea6_39be8388, 0x044f3cf5_8794a23f_e824229a_a69492d2,
    0x0449e5d8_89f6d37b_e1621c22_ed7c2584, 0x04449465_c2ba071b_c9fe50f1_8d296807,
    0x043f4898_8274dc06_121ac4ce_55d35efa, 0x043a026c_1be62980_9d5c5756_88794e9b,
    0x0434c1db_e3f634ac_6d65d742_9d06d11e, 0x042f86e3_31b7e290_1faefb2e_dce93bc0,
    0x042a517d_5e69e6b3_69d67b29_7b4c3c9a, 0x042521a5_c577ee4d_c263cdba_f7b3cf0d,
    0x041ff757_c47bc80a_66bb8058_034c385f, 0x041ad28e_bb3e8863_f1d0c7d8_1012903a,
    0x0415b346_0bb9aa99_b9dfbb5f_e60cd732, 0x04109979_1a182e41_2e35b4f0_4eb7a5f8,
    0x040b8523_4cb7b175_70c09047_b4d23d3d, 0x04067640_0c2987a7_69c9f4e1_69d6d0a3,
    0x04016cca_c333cd10_96e98482_42b41ffa, 0x03fc68be_ded276ca_d8d7aee9_bcc36ecf,
    0x03f76a17_ce385f8f_86630eef_436fd5b9, 0x03f270d1_02d05120_0d5b979f_eb6bb0f0,
    0x03ed7ce5_f03e0a5a_6cd17afa_674233d7, 0x03e88e52_0c5f41fb_d68999da_55b93215,
    0x03e3a510_cf4ca613_c80677bb_5a4c315b, 0x03dec11d_b35ad829_edfb1f7e_6f87d246,
    0x03d9e274_351b6619_276d229b_f2501ac7, 0x03d5090f_d35dbfa2_0033e48a_f47923e7,
    0x03d034ec_0f3028b6_fce5bb0e_e1a2ea59, 0x03cb6604_6be0a885_149f1408_414a3ace,
    0x03c69c54_6efdf53a_b764ccd9_906ba954, 0x03c1d7d7_a0585c8f_c23138ff_39e26fe9,
    0x03bd1889_8a02a910_c402ffbf_3b2eac16, 0x03b85e65_b853042f_f985fe7b_ba79d873,
    0x03b3a967_b9e3d51e_6728c0f1_7859153e, 0x03aef98b_1f949c6f_7ba4e541_4cd54a2a,
    0x03aa4ecb_7c8acc89_a72de9e0_53bfec25, 0x03a5a924_66329ee6_55a07246_6bb50e38,
    0x03a10891_743fe623_bc2c0753_4822edd6, 0x039c6d0e_40aedcea_ed0abcd8_4769b6e9,
    0x0397d696_67c4f1ac_a5ecf97c_c826bb85, 0x03934525_88118f37_4fcbe453_9cd6516e,
    0x038eb8b7_426ee228_a8dab705_a32e5f24, 0x038a3147_3a029b3d_934e678d_e804aea7,
    0x0385aed1_143eae82_85abcc50_db438ab3, 0x03813150_78e20f67_1b3e8c0e_ce162857,
    0x037cb8c1_11f969b7_4546dc12_4346b9aa, 0x0378451e_8bdfd77c_9f51454f_7c279563,
    0x0373d664_953f93ca_6b0a684a_0e9cebe0, 0x036f6c8e_df12aa76_b9b902df_f7d58485,
    0x036b0799_1ca3a4c3_4b5a55fb_150ee7b4, 0x0366a77f_038e32f8_ad287718_6b50b9f9,
    0x03624c3c_4bbfd2f6_23171e11_07b35364, 0x035df5cc_af7873b8_e9921e25_e2d8bb1f,
    0x0359a42b_eb4b15dd_5e80f594_e692dcf2, 0x03555755_be1e691c_a244bc91_2e22c293,
    0x03510f45_e92d66c9_43113f06_546be69b, 0x034ccbf8_3007e94d_86a737ca_d2419ae6,
    0x03488d68_589340ad_e8147b8e_e566edb7, 0x03445392_2b0ac412_60b769b5_179ba4ef,
    0x03401e71_72006059_1555352a_1d0fed7d, 0x033bee01_fa5d23b5_019e8b20_1f6a8f6d,
    0x0337c23f_9361c65b_3e03cd2c_31d25224, 0x03339b26_0ea73041_7d39839b_e1276dce,
    0x032f78b1_401efbf0_6046dfe6_858f93d8, 0x032b5adc_fe13f66c_416b21e5_a47aada1,
    0x032741a5_212a9c37_1793790e_4d903f7a, 0x03232d05_8461936e_15819151_4a7040ad,
    0x031f1cfa_05122305_a92365b0_ecc7872a, 0x031b117e_82f0a726_80f7352a_3218f4a0,
    0x03170a8e_e00d02ae_3eaa9575_f48a0610, 0x03130827_00d30dd6_7f719ea1_24908f4f,
    0x030f0a42_cc0b0204_e3db0ecc_c13df3ac, 0x030b10de_2ad9e2c6_c22812dc_901a579b,
    0x03071bf5_08c1e3fb_2f6a1bcc_64b3fb8c, 0x03032b83_53a2cd2e_0cded52d_cfb3d4f3,
    0x02ff3f84_fbba5a26_c831f45a_af0b5c76, 0x02fb57f5_f3a498ad_7e7635a4_4e9d5180,
    0x02f774d2_305c4389_32ca79ab_1029a861, 0x02f39615_a93b1ab9_cabd9598_d6a962ac,
    0x02efbbbc_57fa38f0_839b11b9_fb25d1b3, 0x02ebe5c2_38b26649_94dcc776_eb42238e,
    0x02e81423_49dc6849_b5091695_788f2d0a, 0x02e446db_8c514f22_374b468e_2b993425,
    0x02e07de7_034ac03e_7913a051_7dc9b239, 0x02dcb941_b4633e1d_5806e3c4_836de1a8,
    0x02d8f8e7_a7966d79_6978f73d_fad52244, 0x02d53cd4_e74157c2_ad9d1325_5ed2a653,
    0x02d18505_8022aaec_797e3d4e_ae7d4db1, 0x02cdd175_815af692_53b5ab97_e5d24d34,
    0x02ca2220_fc6ce676_80b1a080_f9b7c396, 0x02c67704_053d7a5c_fc368bd4_5abb5461,
    0x02c2d01a_b2143b45_9e95b1e3_bb3e083e, 0x02bf2d61_1b9b6e08_2ce05a49_92ca1981,
    0x02bb8ed3_5ce04355_14249081_4c7d365f, 0x02b7f46d_9353051d_9080d9fb_10ba1c4e,
    0x02b45e2b_dec74166_0196f398_909e9f9d, 0x02b0cc0a_6173f285_2e9ab0c9_0445cb3a,
    0x02ad3e05_3ff3a4d3_3ce97dd5_71aae02f, 0x02a9b418_a14499cb_1cc0d273_e8482c98,
    0x02a62e40_aec8e8a1_304e1687_f92ce1a8, 0x02a2ac79_94469c51_f1f11e36_50457907,
    0x029f2ebf_7fe7cf2b_5f23794d_819eb121, 0x029bb50e_a23ac3d3_ee0a61b1_eb5af676,
    0x02983f63_2e31fbd1_d447222f_74738ad7, 0x0294cdb9_59244b95_66226011_c108d625,
    0x0291600d_5accec09_55b1cb70_40af5965, 0x028df65b_6d4b89ab_9a156183_810693c4,
    0x028a909f_cd245131_c761a6ee_c755e573, 0x02872ed6_b93ff9bb_a03f1304_7c110dc1,
    0x0283d0fc_72ebcc96_aab4560b_b8aba11a, 0x0280770d_3dd9aa95_91f938d5_74ed4ecf,
    0x027d2105_60200efe_1f9290ea_56e905bc, 0x0279cee1_223a1010_96552fb6_ad7547d6,
    0x0276809c_cf075d2b_3a45d1cd_e5c895db, 0x02733634_b3cc3a8c_d09eeb24_aa54d6f8,
    0x026fefa5_20317ab8_e392c379_1322b701, 0x026cacea_66447580_95a8b090_91f5f8f2,
    0x02696e00_da76fcb2_d0d76006_88cc9616, 0x026632e4_d39f4e76_9dbc15ac_f5591173,
    0x0262fb92_aaf80552_6f878b8f_ac9b55c8, 0x025fc806_bc2005e3_316cc31c_b6984bd1,
    0x025c983d_651a6a45_e28c9968_e299f65f, 0x02596c33_064e6b36_8d8258a3_02f88ccd,
    0x025643e4_028746e7_68d9d433_96684015, 0x02531f4c_bef42592_edd6e16f_f22995d8,
    0x024ffe69_a327fbcb_b31039e1_ea4f0b7c, 0x024ce137_19196a8c_d8750ba6_bdeec115,
    0x0249c7b1_8d229d0d_d264b60d_7f8b0f5a, 0x0246b1d5_6e01245c_618b7226_8e438674,
    0x02439f9f_2cd5d0bf_853cf627_9be53b29, 0x0240910b_3d2488e6_3607852b_1dff3877,
    0x023d8616_14d41ee4_b63658b4_0e5c380d, 0x023a7ebc_2c2e2303_45f1ec50_da396c4b,
    0x02377af9_fddeb461_089f738f_b34b099e, 0x02347acc_06f44f6d_e90ead0c_863f8afd,
    0x02317e2e_c6df9a3e_49ee6092_f8ea4871, 0x022e851e_bf732ebb_4fe427fe_2900f175,
    0x022b8f98_74e362b2_9283b091_6423dc67, 0x02289d98_6dc60dc8_013c72e1_5e990d1b,
    0x0225af1b_33124d4c_c92af7f8_cb8a7a01, 0x0222c41d_502045fe_088c291d_78752400,
    0x021fdc9b_52a8e3ae_1c5de26f_7862ceec, 0x021cf891_cac596db_54801581_34030b37,
    0x021a17fd_4af01036_da6d3df7_5f38e11a, 0x02173ada_6801fa1e_965fc538_29c7c444,
    0x02146125_b934b00c_de743931_f4494b4d, 0x02118adb_d820f400_bb0df34e_f4d3a66e,
    0x020eb7f9_60bea1e1_8b74fdcb_20d81b52, 0x020be87a_f16460e0_d550b4dd_f30479f3,
    0x02091c5d_2ac752dd_094ad48e_af266abb, 0x0206539c_affac1c8_06ca61a6_defbd388,
    0x02038e36_266fcb14_28552a1d_ebc78969, 0x0200cc26_35f5092a_a1c17d9e_9fc47612,
    0x01fe0d69_88b63aed_f8f83f83_4832e179, 0x01fb51fc_cb3be94b_619996f0_f4228eb9,
    0x01f899dc_ac6b0add_c3644db2_29ccf95f, 0x01f5e505_dd84a5a5_32c96934_0bbc01ab,
    0x01f33375_12256ed5_a29ab8b7_4050c082, 0x01f08527_004568bf_9543fe83_386d811d,
    0x01edda18_60377ed5_937b05dc_10a5acb5, 0x01eb3245_eca91fd1_2dcb6ac8_b9ba4d8f,
    0x01e88dac_62a1d5fa_4dd71989_e07b8ae2, 0x01e5ec48_8182dd93_9b94a025_b092dbff,
    0x01e34e17_0b06b96e_ba405ace_6ca81152, 0x01e0b314_c340c5ab_201d5259_27b7cbea,
    0x01de1b3e_709cc8a2_4b8658a7_a825db56, 0x01db8690_dbde8204_172f9007_4e45d268,
    0x01d8f508_d0213825_eed41e4b_05bd9ab6, 0x01d666a3_1ad74387_a4e35905_a8a63308,
    0x01d3db5c_8bc99890_a91443fc_1e029e1b, 0x01d15331_f5174f88_5f15cbe3_9f18b431,
    0x01cece20_2b352acc_53ddc403_05e91386, 0x01cc4c24_04ed1b47_0f605b91_3035a638,
    0x01c9cd3a_5b5dc32a_3fbd85ea_f3254e1b, 0x01c75160_09f9f6ee_fa31b536_8eaae7a8,
    0x01c4d891_ee883c9e_cd534fff_d598e0dc, 0x01c262cc_e9224968_5f5e7e07_2c2cc853,
    0x01bff00d_dc347d82_52854d26_dabf68e7, 0x01bd8051_ac7d5e5f_286acb17_a7afdb3e,
    0x01bb1395_410d0f34_dd1c8a41_b71549e2, 0x01b8a9d5_8344c7da_f10724ec_8e21d404,
    0x01b6430f_5ed64a01_9887b94c_ba1601ff, 0x01b3df3f_c1c354c4_c6de1063_8e3241b3,
    0x01b17e63_9c5d169d_c9612faa_d02c3c48, 0x01af2077_e1439db6_26f28060_9ddc5982,
    0x01acc579_8565469e_76c2853d_67011e72, 0x01aa6d65_7ffe296b_e08d4eb4_f0292644,
    0x01a81838_ca97853e_f78484e2_b42e8401, 0x01a5c5f0_61072a36_a028fb30_9b526192,
    0x01a37689_416ee1d1_b05e5aec_0c28b3d7, 0x01a12a00_6c3bd5c1_f8088da0_1c82992e,
    0x019ee052_e425f533_5f843473_7821ce59, 0x019c997d_ae2f5889_c849ad3c_c89af277,
    0x019a557d_d1a3a398_5b04eec8_4dc44a23, 0x01981450_58176654_ed63ea2c_1126d074,
    0x0195d5f2_4d677c0a_28d1254c_aac88ccd, 0x01939a60_bfb8690b_1a40f121_a5727e40,
    0x01916198_bf75b6ea_d224fb24_a18a2061, 0x018f2b97_5f514f3a_ba840ae7_6fd06687,
    0x018cf859_b442d4d2_481a8959_2498267c, 0x018ac7dc_d586fba2_aa4bfd0d_c0997667,
    0x01889a1d_dc9edf19_1c8dfc2c_1c3da48a, 0x01866f19_e54f5712_7ad237be_497479f3,
    0x018446ce_0da04b62_b94f3b44_fae0617e, 0x01822137_75dc05f2_dede4ce1_52555265,
    0x017ffe53_408e8378_1ff88c6b_a3586714, 0x017dde1e_9284c2c6_b72e08a2_431c0a45,
    0x017bc096_92cc12c3_16bf0781_95ee25a9, 0x0179a5b8_6ab15ef4_0dca380d_603fcc89,
    0x01778d81_45c07ab8_7a49f699_2d7e0405, 0x017577ee_51c36b23_1fdf3f2f_88cf5410,
    0x017364fc_bec1af7f_3a2a6251_d6ec69c7, 0x017154a9_beff8880_60301527_bd94797b,
    0x016f46f2_86fd3e20_4d050d8e_d4c68d73, 0x016d3bd4_4d76642d_20b30a8a_417ea39c,
    0x016b334c_4b611d8a_aafff88c_de391ed0, 0x01692d57_bbed5e29_5072d535_6590f2ce,
    0x016729f3_dc842bb5_18a21586_e9703e7b, 0x0165291d_ecc6dcff_7384a2a3_7a3e4cba,
    0x01632ad3_2e8e5826_422909c4_6ea10a78, 0x01612f10_e5ea4f7a_adde42ca_d65f5a59,
    0x015f35d4_59207d2a_577e7b79_3c0f1cf0, 0x015d3f1a_d0abddad_672eaa62_304abed3,
    0x015b4ae1_973be8fc_038551ff_ac3399b6, 0x01595925_f9b3ca8d_b5a7d866_d81e5848,
    0x015769e5_47299825_3e8830c9_0382c794, 0x01557d1c_d0e5876b_60044f92_89c3ddc3,
    0x015392c9_ea61225b_1b3e069d_f4596cb1, 0x0151aae9_e9467a81_e4147abd_dcdce0b0,
    0x014fc57a_256f5b16_48386cf1_c8955ea0, 0x014de277_f8e479e7_86e2160e_406f49b9,
    0x014c01e0_bfdca728_94ba5991_69454588, 0x014a23b1_d8bbfc19_0611a1e3_ca667d24,
    0x014847e8_a413088e_5804d376_f4423fd9, 0x01466e82_849dff60_0fb47325_3b3c419c,
    0x0144977c_df43e1b9_253364f8_4616cd0f, 0x0142c2d5_1b15a951_2e51911e_ea302895,
    0x0140f088_a14d718f_bbe34b6a_6efb11df, 0x013f2094_dd4d9f9c_5aa09432_0d7e084b,
    0x013d52f7_3ca0095d_a72f3601_072ce425, 0x013b87ad_2ef51b69_e36067fd_1b4b898c,
    0x0139beb4_2622fdeb_791dff82_ecfab289, 0x0137f809_9624b87b_d5f4620b_e3d4fa37,
    0x013633aa_f51954f7_0895590a_4bcadbe2, 0x01347195_bb43014a_881ca9ff_49ee7b05,
    0x0132b1c7_63063041_8b49eb9a_27ffe2dd, 0x0130f43d_68e8b951_544b8326_2b1855d8,
    0x012f38f5_4b90f767_d41d09dd_69607f62, 0x012d7fec_8bc4e6bf_06df95d2_b6072014,
    0x012bc920_ac6941b7_68f48bf6_9d9ec714, 0x012a148f_32809cbb_e303be2c_65d15223,
    0x01286235_a52a8131_8973af59_d79acb32, 0x0126b211_8da28775_8a36edb9_f556a6f8,
    0x01250420_773f6feb_a22b8f5f_2249b21c, 0x0123585f_ef723b1f_71a20399_03ec85f6,
    0x0121aecd_85c540fb_05f6a3b6_9f0fb8cd, 0x01200766_cbdb4714_ec7dbc33_b7b16f3b,
    0x011e6229_556e9618_2154329b_ce118821, 0x011cbf12_b8500e48_2af77a1c_6078a714,
    0x011b1e20_8c663b23_b1d63eaf_25878521, 0x01197f50_6bac6627_e15812bc_170ea22c,
    0x0117e29f_f231a8b6_de2582d7_41c7fa25, 0x0116480c_be17fd23_9bc34490_c175600d,
    0x0114af94_6f934ee5_59dac5eb_edf68d9d, 0x01131934_a8e889f5_0fd038b7_c2c3a45c,
    0x011184eb_0e6ca957_0b8a5564_95f07bb7, 0x010ff2b5_4683c4d3_069281c5_3d39b363,
    0x010e6290_f9a01ddc_f2f4cf1b_0bad7f4c, 0x010cd47b_d2412bb0_bf866588_2b4bbb14,
    0x010b4873_7cf2a6a3_51767732_8137059d, 0x0109be75_a84b92aa_ef49c0a6_8110a375,
    0x01083680_04ed4921_579af405_36a8f960, 0x0106b090_458281c1_bc3336d7_9ea44bc5,
    0x01052ca4_1ebe5ae4_d8451c9b_8108fe31, 0x0103aab9_475b60fd_56ca47d7_ccb3257b,
    0x01022acd_781a9556_bc381e50_5f53423f, 0x0100acde_6bc27419_04f2c857_9f5ee192,
    0x00ff30e9_df1df993_28170cc7_b59cac91, 0x00fdb6ed_90fba6ce_ac638861_d8a969eb,
    0x00fc3ee7_422c856e_7b3845b0_300f6543, 0x00fac8d4_b5832adb_1bd0df8a_644555ab,
    0x00f954b3_afd2babe_7f09217d_decdbe47, 0x00f7e281_f7ede8d1_82268c0c_b6fb521f,
    0x00f6723d_56a5f9fd_4d4a4468_bd64dbc8, 0x00f503e3_96c9c4d2_b056cd6e_364c3e9c,
    0x00f39772_8524b159_9f3b7792_7a6fe7c7, 0x00f22ce7_f07db83a_ecbcc4a0_7241f521,
    0x00f0c441_a9966146_60f50fd5_e20d3987, 0x00ef5d7d_8329c157_46eba89a_93ad906d,
    0x00edf899_51eb7799_8ac23af2_f70664c6, 0x00ec9592_ec86aa31_8018e24b_c60fa456,
    0x00eb3468_2b9d0248_66689e98_0b7c0b0d, 0x00e9d516_e9c5a77f_bf321e3e_9252cefd,
    0x00e8779d_038c3acd_87fbee42_b03cb20d, 0x00e71bf8_576fd0c3_68372aad_6bbf0bbf,
    0x00e5c226_c5e1eb42_e13cc0b9_7d5d2ee2, 0x00e46a26_314572a0_8caf3fdc_440d0eda,
    0x00e313f4_7dedae38_73a61ba8_8480ebef, 0x00e1bf8f_921d3c75_871f23e2_0f2488ad,
    0x00e06cf5_56050a4e_4049df12_e1136b60, 0x00df1c23_b3c34a38_6d5663ad_f80f6c1f,
    0x00ddcd18_97626a96_2d864968_1a028c49, 0x00dc7fd1_eed80b9e_1d525d04_b2f95798,
    0x00db344d_aa03f4c0_b18ae979_5349ccf0, 0x00d9ea89_baaf098c_be6aaf0d_1c7f2550,
    0x00d8a284_148a3e15_25a60905_917068cd, 0x00d75c3a_ad2d8ad9_a490518d_ea71a9fb,
    0x00d617ab_7c16e034_b9814ed2_84bacfdb, 0x00d4d4d4_7aa91950_95b360c3_9e018387,
    0x00d393b3_a42aeea5_0ee14990_b65b74d5, 0x00d25446_f5c5e800_81f7c8a3_21f9829a,
    0x00d1168c_6e854e1d_963bdd98_076b95f7, 0x00cfda82_0f551bc7_ce526b60_bba6edf8,
    0x00cea025_db00ee90_d2a12027_9bd4f169, 0x00cd6775_d632f718_5e8b01bd_9c87b326,
    0x00cc3070_0772e8e8_b814cd03_2540c583, 0x00cafb12_7724e9e9_97867dc9_c05b71f2,
    0x00c9c75b_2f88816b_62a7d8e2_da8f780d, 0x00c89548_3cb786cc_9d3db83c_53914fc5,
    0x00c764d7_aca50fbb_6e7525d2_e80719e5, 0x00c63607_8f1c5e15_18f00aa4_487c65aa,
    0x00c508d5_f5bfcd65_412d5f61_97eb7554, 0x00c3dd40_f407c006_dc0c6a24_7332d8f7,
    0x00c2b346_9f418be8_9d2fab84_b6b96d41, 0x00c18ae5_0e8e66f6_bb08b2ce_ea5e1dbf,
    0x00c0641a_5ae2532b_dc5a2968_3f540e12, 0x00bf3ee4_9f030a4b_01010545_ccfb355c,
    0x00be1b41_f786e944_35d8fe5c_5d9f9f37, 0x00bcf930_82d3db45_e1931faa_79c9ef53,
    0x00bbd8ae_611e447c_76579e87_fec1a9ad, 0x00bab9b9_b467ec82_520e0ec8_9c1b3249,
    0x00b99c50_a07ee881_9528947e_ec74b675, 0x00b88071_4afc8509_b5cfe14c_f97c3775,
    0x00b76619_db442f9a_934e9fa7_f4950ba4, 0x00b64d48_7a825fe6_cb9b6ebd_78c0b321,
    0x00b535fb_53ab80cf_12e0c231_141ece73, 0x00b42030_937ad918_4ae1de1b_ffa39b45,
    0x00b30be6_687173de_161bc5fc_432476e4, 0x00b1f91b_02d508c3_a08050f4_081245ae,
    0x00b0e7cc_94aee3e4_55a8b338_1537c805, 0x00afd7f9_51cacd86_3a5bb02a_66dfb91e,
    0x00aec99f_6fb5f18f_9d4256ab_21307809, 0x00adbcbd_25bdc6c1_d0a4a5f0_c679848c,
    0x00acb150_aceef5ba_9d05c8fd_35942efa, 0x00aba758_40143fbe_1a75bdc6_841032f6,
    0x00aa9ed2_1bb5654a_9c6c3fa2_ca47e780, 0x00a997bc_7e160c78_59feaea8_5e443ee9,
    0x00a89215_a734a726_7a4073af_286be3c7, 0x00a78ddb_d8c958f7_2a9b0e9c_83bb6da7,
    0x00a68b0d_5644dd1c_62e896c4_b80c8ee0, 0x00a589a8_64cf6bf6_f918ff91_3674aab4,
    0x00a489ab_4b47a089_a427f259_639bdd80, 0x00a38b14_52415dc1_8c268587_5c367c37,
    0x00a28de1_c404b396_03198cc7_90c95fe4, 0x00a19211_ec8cc401_006ab228_8bc2e0df,
    0x00a097a3_1986a7d1_f6a800b9_419f0294, 0x009f9e93_9a50535c_994b0a5b_dbca1d31,
    0x009ea6e1_bff77b05_263e601f_4b5a9ac4, 0x009db08b_dd3877ab_c4d5b273_b73bcdd5,
    0x009cbb90_467d2af8_89eaa0df_fe6b05ca, 0x009bc7ed_51dbe389_aece0b66_52c0dc92,
    0x009ad5a1_57164105_86bb9e62_fdd8a0e8, 0x0099e4aa_af981811_bc7b583c_9ade3258,
    0x0098f507_b6765631_5fdaf28c_af140127, 0x009806b6_c86de58b_48a76a49_16bd1ea0,
    0x009719b6_43e2909a_52cd5fb3_07905ae7, 0x00962e04_88dde5c8_f545b32a_92278065,
    0x0095439f_f90e1af9_b372a33a_f7490086, 0x00945a86_f7c4f0fd_e690c5fc_82886a80,
    0x009372b7_e9f696fc_5ade87f5_de3a9321, 0x00928c31_36388dc9_3a1c68a5_3745a810,
    0x0091a6f1_44c08b30_bb07fc6f_887bbbc9, 0x0090c2f6_7f635d36_0b73d082_c6e8a565,
    0x008fe03f_5193cd47_e89eaad9_6f3dfee0, 0x008efeca_2861836c_576d4a98_6662e58c,
    0x008e1e95_7277e964_ec2ac702_c303bd59, 0x008d3f9f_a01d0dcd_0f74f8c3_b2c9d9a2,
    0x008c61e7_23308733_abfbfdd9_4a08ddfa, 0x008b856a_6f2a5731_aebde779_ed67947e,
    0x008aaa27_f919cd7e_c169fe59_add4e7cc, 0x0089d01e_37a46b05_a499c830_21499925,
    0x0088f74b_a304c4f9_8d911cb6_fd2707cc, 0x00881fae_b50967ed_e93a23f5_353f0b66,
    0x00874945_e913baf1_e4160eeb_1d4e88f3, 0x0086740f_bc16e2b1_14dfc1f5_b71cd995,
    0x0085a00a_ac96a49a_a5a280d7_e719e200, 0x0084cd35_3aa64a10_550bfa97_ea252445,
    0x0083fb8d_e7e7839e_a7c6da90_8358180e, 0x00832b13_37894c3f_9fb1477c_96cb1337,
    0x00825bc3_ae46cca9_4cc97c20_295262c0, 0x00818d9d_d2663ea9_89b1eabc_24b46a37,
    0x0080c0a0_2bb7d090_33b627e6_283c3293, 0x007ff4c9_439488a9_2c422dd8_b0467733,
    0x007f2a17_a4dd28c7_6fc66a01_d35f9429, 0x007e6089_dbf911e2_8c0c76a1_cd7739aa,
    0x007d981e_76d527c7_be0a64ca_e49407de, 0x007cd0d4_04e2b4df_fd4d1320_701a304b,
    0x007c0aa9_17164e0c_391d3e5b_c551b28e, 0x007b459c_3fe6b699_098ec4ee_92919dce,
    0x007a81ac_134bc44b_14b60218_18300ffc, 0x0079bed7_26bd4385_664c316d_4667cb41,
    0x0078fd1c_1131db8a_f6197d24_e7634bb5, 0x00783c79_6b1df2dc_9789b264_bd406b32,
    0x00777ced_ce7293b4_8adf9a41_39e7a116, 0x0076be77_d69c50a0_e68aa707_d3c44d3f,
    0x00760116_2082293e_0d3306a6_de9adf7e, 0x007544c7_4a846f12_63213f72_69dc5d91,
    0x00748989_f47baa8c_73b846fb_6d2b7684, 0x0073cf5c_bfb78024_b5cb85ff_4107c33c,
    0x0073163e_4efd95a4_1bad7b6d_10358db8, 0x00725e2d_46887790_99e7ade3_edfb3ce6,
    0x0071a728_4c067ec0_cda1599f_3297885e, 0x0070f12e_0698b617_e9cfcb42_9e1b6b0f,
    0x00703c3d_1ed1c06b_1061a111_ce16bffa, 0x006f8854_3eb4be91_3aad3e86_621184f4,
    0x006ed572_11b4359e_d2829c97_a6c7d4ae, 0x006e2395_44b0f54e_1b594e02_06b420c7,
    0x006d72bc_85f8fe95_892d0d12_64759525, 0x006cc2e6_85466a6d_20b57a82_d648552b,
    0x006c1411_f3be50c3_fac0dd66_4076abf7, 0x006b663d_83efafa7_0295b584_aac8f96d,
    0x006ab967_e9d2529a_055bce6a_e3c9a86b, 0x006a0d8f_dac5ba24_26ab3c4f_75436c8b,
    0x006962b4_0d900390_cc7e4749_da89e02e, 0x0068b8d3_3a5cd0e6_12e2c7a6_79840047,
    0x00680fec_1abc3111_d5e7d9d3_9f997686, 0x006767fd_69a1884e_5e661be5_a812944e,
    0x0066c105_e36278bf_bc62dc68_d8dcf36c, 0x00661b04_45b5cb4a_d7f1c487_380b2107,
    0x006575f7_4fb258a7_3f9c98ca_d980c861, 0x0064d1dd_c1cdf2ac_b97dae4f_93b73846,
    0x00642eb6_5ddc4ddd_9a5fa859_ca582dee, 0x00638c7f_e70deb2e_e45bfe4d_a1458359,
    0x0062eb39_21ef020f_2c99ae2f_7e5bf001, 0x00624ae0_d4666aad_45f65e6b_ca55274d,
    0x0061ab75_c5b4887f_ac8e0cda_655311d6, 0x00610cf6_be72350d_ac4042fe_c5499012,
    0x00606f62_888faafb_3a7da297_398b7d2c, 0x005fd2b7_ef537158_79d57bcd_e221c484,
    0x005f36f5_bf594735_dbe901f0_9dfff9c3, 0x005e9c1a_c6910f7d_d4989e99_25e2ad84,
    0x005e0225_d43dbd15_0f6fd7bc_e540c227, 0x005d6915_b8f43f42_16853d48_a2000145,
    0x005cd0e9_469a6e5d_5835e0c4_f46361ed, 0x005c399f_5065f8ca_7756f70e_d6c02176,
    0x005ba336_aadb503b_cfac7376_acb26b39, 0x005b0dae_2bcc9741_16a8ae96_2483bb8c,
    0x005a7904_aa588f21_feaf83da_faf5a486, 0x0059e538_fee98605_c14ec115_4b7a936d,
    0x0059524a_03344568_73164d39_b41979a8, 0x0058c036_923700df_01f410e2_d42f117e,
    0x00582efd_8838452a_bd326dd5_e2f2acb0, 0x00579e9d_c2c5e79d_4473f4c1_47e24db7,
    0x00570f16_20b3f5cd_b9440b72_f7e98b9f, 0x00568065_821ba5a0_0d125bb2_478b186d,
    0x0055f28a_c85a459f_43ae2d8c_06a69412, 0x00556584_d6102dab_80974100_f3e704ce,
    0x0054d952_8f1faffc_b3bb5469_82556952, 0x00544df2_d8ac0a7a_b87a4844_ebe10b66,
    0x0053c364_9918586b_b80ec045_c76664ef, 0x005339a6_b8068479_9ebe3df7_c167d516,
    0x0052b0b8_1e563b0f_7179fcff_6b85eb45, 0x00522897_b623dd0f_4fe1555f_e8522f87,
    0x0051a144_6ac772e1_ecdf1706_ecc30811, 0x00511abd_28d39fe0_466534bd_645bb548,
    0x00509500_de149618_63152d1c_13559cd6, 0x0050100e_798f0a6d_daefefdc_d5166e1c,
    0x004f8be4_eb7f2916_ee758662_6b263ec2, 0x004f0883_25578a76_edeb8924_ff6c363a,
    0x004e85e8_19c02856_b0d16a5e_34ee77ba, 0x004e0412_bc95537b_dbdada55_85345906,
    0x004d8302_02e6a99f_b21b0488_497c0239, 0x004d02b4_e2f60bc6_2c5f200e_b922494b,
    0x004c832a_543694f6_100bca81_dff030a0, 0x004c0461_4f4b9152_bd26e4b2_9ca5c1df,
    0x004b8658_ce077598_698f2d1e_a25ab401, 0x004b090f_cb6ad6fb_7dbb9ea0_cda88279,
    0x004a8c85_43a3636b_c5b6abbb_7bcc187b, 0x004a10b8_340ada3c_2764c966_a02ef6e1,
    0x004995a7_9b26052f_8d8260d3_d1bfe5ab, 0x00491b52_78a3b1eb_b5232f6f_4a932dc3,
    0x0048a1b7_cd5babd2_89dc58cf_caafd504, 0x004828d6_9b4db642_bb22f88d_8c1ded06,
    0x0047b0ad_e5a08740_33cadb5a_2ffb2982, 0x0047393c_b0a0c285_1af4306c_20f51293,
    0x0046c282_01bff4fc_041b7f95_e26479fc, 0x00464c7c_df9390a3_f264fe66_e104de5d,
    0x0045d72c_51d3e8de_d1a380a4_8d26ee5f, 0x0045628f_615b2f2b_0603b76f_fa8e1e0c,
    0x0044eea5_18247048_b1ae3fa9_6298c42e, 0x00447b6c_814a91cb_4e1e24b6_5f6d1f04,
    0x004408e4_a9075018_3555f9d3_7f872469, 0x0043970c_9cb23cd2_b58b82a3_28cf8493,
    0x004325e3_6abfbdb6_485114cb_3a4a019b, 0x0042b568_22c00bdf_84b46934_5926d9c7,
    0x00424599_d55e3384_623c7ce8_98b41165, 0x0041d677_945f141c_612368a5_d15aa3ab,
    0x00416800_72a060f9_2a9dbbf8_8112d855, 0x0040fa33_8417a250_3a76ee17_de409c40,
    0x00408d0f_ddd136b6_21c1dcb7_af32e051, 0x00402094_95ef550b_f0d51888_bf7dea54,
    0x003fb4c0_c3a90edf_5544e919_2924620b, 0x003f4993_7f49533d_f7087f19_4bdaf15e,
    0x003edf0b_e22df1fc_9e74bd9b_e90d0088, 0x003e7529_06c69f72_ab355995_a3537379,
    0x003e0bea_0893f8aa_62eccb83_cf7e360a, 0x003da34e_04268806_9ca4b291_64acca81,
    0x003d3b54_171dca5e_4cbad39b_c25afd4c, 0x003cd3fb_6027348e_737ad1ec_674c42a7,
    0x003c6d42_fefd3982_ef1a1c20_9eb34a06, 0x003c072a_146650b6_b0524e50_45c1792a,
    0x003ba1af_c233fd2b_cf5e7bd0_6bdb7e31, 0x003b3cd3_2b41d4db_fda96fa8_adcad38b,
    0x003ad893_737488a1_cf05fbb1_71f28f03, 0x003a74ef_bfb8ec9b_53d6e407_f60b03a3,
    0x003a11e7_36030106_7c19d7c1_840e448d, 0x0039af78_fd4cfb97_b9d83932_f73d8917,
    0x00394da4_3d96514b_58113862_9175eec5, 0x0038ec68_1fe2c0b1_f9c2f1f1_59e9c9eb,
    0x00388bc3_ce395cb8_b34be494_02c834c7, 0x00382bb6_73a397ed_2ef31faa_9ef56394,
    0x0037cc3f_3c2c503e_4bfc0f3f_15d1b39c, 0x00376d5d_54dedb39_a642bd3c_eee3b8ee,
    0x00370f0f_ebc612c6_72f6c59e_506ad0aa, 0x0036b156_2feb625e_1da6141a_568514d4,
    0x0036542f_5155d4c3_0f64ce1c_9b93b0e6, 0x0035f79a_81092236_087d8bf5_34afa058,
    0x00359b96_f104bf2a_73b438bf_ca1b4f7d, 0x00354023_d442eb7a_18c699f0_11965e75,
    0x0034e540_5eb7c218_92779e36_047a675e, 0x00348aeb_c5504946_eb1627f4_f7203e09,
    0x00343125_3df18347_c1151242_85554015, 0x0033d7eb_ff777f94_53f0b0b5_726cbc4f,
    0x00337f3f_41b46c92_d846029d_90678bff, 0x0033271e_3d6fa9ce_70a941ed_0780986b,
    0x0032cf88_2c64dab1_27745d85_93264102, 0x0032787c_4942f9c0_44724e1a_4379aba7,
    0x003221f9_cfab6c5b_57fa0cbc_fbf4dd41, 0x0031cbff_fc3116fe_53bb42cf_5fda5b4d,
    0x0031768e_0c577207_082f94b6_75afc452, 0x003121a3_3e919efe_5c55aba8_8ebfa243,
    0x0030cd3e_d2417e65_940edf7b_b690ffcf, 0x00307960_07b6c607_f82d97c2_2365867a,
    0x00302606_202e17d1_31f92c00_273a2881, 0x002fd330_5dd01928_aaa43596_98f94893,
    0x002f80de_03b08ad2_3debeb54_8ab34189, 0x002f2f0e_55cd6154_8dd23eb6_aeebbd53,
    0x002eddc0_990ddde5_44210dd9_b4b7b51e, 0x002e8cf4_1341a7db_8d22d33b_2b751253,
    0x002e3ca8_0b1fe6a9_15bccdba_9e169493, 0x002decdb_c8465c59_d5d7a807_6b41a3fd,
    0x002d9d8e_9338809a_eec62ee8_bd3508d6, 0x002d4ebf_b55e9c48_e41da9b1_b4cddc3f,
    0x002d006e_7904e585_7438e7d6_a54eb27a, 0x002cb29a_295a9c55_5466120f_ec87cf42,
    0x002c6542_127127c6_1387c4d6_d6278e16, 0x002c1865_813b339c_64bbed60_efed1d7f,
    0x002bcc03_c38bce8b_1266519a_b0450480, 0x002b801c_281588f2_d8c9970c_5a590ed4,
    0x002b34ad_fe69942b_66280411_47d1fb31, 0x002ae9b8_96f6e255_bd351a5c_79eb4b32,
    0x002a9f3b_430946b8_3572896c_795a9baf, 0x002a5535_54c896a4_53e5d347_bc6f8ee1,
    0x002a0ba6_1f37cae6_b568559a_54c85ff3, 0x0029c28c_f63421c1_42a93d0a_91fb8ddf,
    0x002979e9_2e74416f_e4d03846_59e7d4fb, 0x002931ba_1d875b37_f0888bd4_b9da01e5,
    0x0028e9ff_19d44f02_7c166f09_f543ed24, 0x0028a2b7_7a98cf81_d3f45d80_3494ff59,
    0x00285be2_97e886e2_40534710_e0d80f7d, 0x0028157f_caac3c06_4cb7425c_7717f328,
    0x0027cf8e_6ca0f84e_c1ca9b56_d6b3710f, 0x00278a0d_d8572dee_8062c7e8_480b99d1,
    0x002744fd_6931deca_6b95f858_25d4bea7, 0x0027005c_7b65c3e5_8ea49fba_90d61303,
    0x0026bc2a_6bf87559_aa6071d1_35030ddd, 0x00267866_98bf92dc_54a1ef87_30cdddd2,
    0x00263510_605fecd0_d346b135_eb3782e8, 0x0025f227_224cade6_db1d2dfd_5c51ddfb,
    0x0025afaa_3ec68546_5a0ec974_50d4e384, 0x00256d99_16dad148_72c6748f_e3f8daf7,
    0x00252bf3_0c62cabd_cf012b9d_3df160db, 0x0024eab7_8202b0c2_6ca61143_2485272f,
    0x0024a9e5_db28f51f_08b5d574_bf73d073, 0x0024697d_7c0d6938_4a147ec3_e7dde645,
    0x0024297d_c9b06b8b_cd258c4c_655bfcd8, 0x0023e9e6_29da15bb_3028be34_bf525238,
    0x0023aab6_03196b25_3f3da22c_1ae3b0f4, 0x00236bec_bcc3880d_5ded480b_8bb11ad1,
    0x00232d89_bef2d151_4b14407e_1319765a, 0x0022ef8c_728624ad_5b033bf4_55cb1889,
    0x0022b1f4_4120098f_42aa4ad4_29782499, 0x002274c0_9525e277_8da1e06a_295fdb9e,
    0x002237f0_d9bf1ee9_d7e55043_782c6ca7, 0x0021fb84_7ad46deb_e31488dc_08bf8010,
    0x0021bf7a_e50ef113_9e164e93_e3f340b3, 0x002183d3_85d77024_34f92e3a_f8036515,
    0x0021488d_cb558d3a_3df7c6cb_886a2268, 0x00210da9_246ef987_178ce5b1_39276cfd,
    0x0020d325_00c6aa9b_8a8d3fcd_4812268b, 0x00209900_d0bc1041_c24752d4_a37182d0,
    0x00205f3c_056a4ae6_abb62e34_7d749d7f, 0x002025d6_10a76292_cbe187e5_9180d72f,
    0x001fecce_65037e72_9c949802_e3dcad52, 0x001fb424_75c81cee_7da5bd19_3c1f67de,
    0x001f7bd7_b6f74c52_481ae279_6f785edc, 0x001f43e7_9d4ae404_8f8a08de_d1460be4,
    0x001f0c53_9e33be4d_9d2a27f0_7b41d632, 0x001ed51b_2fd8f2ae_2f1ee400_e1549b81,
    0x001e9e3d_c91710c6_05a1466a_45b71211, 0x001e67ba_e17f5bca_46c0c774_c262378c,
    0x001e3191_f157068b_c0928646_109cd758, 0x001dfbc2_7196700d_10c08564_08eaa237,
    0x001dc64b_dbe860a8_b788283e_caea50b2, 0x001d912d_aaa947c7_1b55ff72_1cf2acda,
    0x001d5c67_58e67a24_814d2d60_2bcd33ec, 0x001d27f8_625d70a6_fe2a52d9_7c6a8aa2,
    0x001cf3e0_437b07c4_6215031b_84ec4708, 0x001cc01e_795abf78_211736eb_be8370c7,
    0x001c8cb2_81c5fbc9_39181758_afbabfd7, 0x001c599b_db3345e0_155ec113_e7e491cb,
    0x001c26da_04c58dac_6eca50c3_8681f024, 0x001bf46c_7e4b6c1b_27169e71_fc7755c3,
    0x001bc252_c83e65dc_1cb089bf_6faefacb, 0x001b908c_63c22eb7_f3c998ff_b75cb4f9,
    0x001b5f18_d2a3ed75_d088f256_6b9261a9, 0x001b2df7_97598050_fd675e7a_207c78e5,
    0x001afd28_3500c1fe_77f51060_c1ec6eef, 0x001accaa_2f5ecf42_5d7a5aff_4c75db92,
    0x001a9c7d_0adf4d15_30184dcb_113530ac, 0x001a6ca0_4c93af58_ec436114_956f87e3,
    0x001a3d13_7a32801d_e5a8ebec_5bdd4b78, 0x001a0dd6_1a16a777_61c80d4e_fb05c9f7,
    0x0019dee7_b33eb3df_e5c0011c_741b7aa2, 0x0019b047_cd4c232d_2c108621_8fd79a03,
    0x001981f5_f082ac13_b645047a_0d727261, 0x001953f1_a5c78839_edc08a0e_cd74d663,
    0x0019263a_76a0beda_c61f7529_2dfde4ee, 0x0018f8cf_ed346ff7_d2e3c240_1927c813,
    0x0018cbb1_9448201a_c162697d_9ffcabd0, 0x00189ede_f74004a6_272b093d_77e2cefe,
    0x00187257_a21e50b5_94674423_a8d069a7, 0x0018461b_2182828c_d8f4ba9b_d85f6ef7,
    0x00181a29_02a8b196_6a435fc7_db5f1d66, 0x0017ee80_d368dcf0_d74a1850_e5ef409a,
    0x0017c322_22363a8b_372d1561_7e455bd8, 0x0017980c_7e1e86d0_7e7c3675_4d1330c5,
    0x00176d3f_76c954e1_a63be8d3_7a608ce7, 0x001742ba_9c775f5e_8f387a9b_52ae0c32,
    0x0017187d_8001d9bd_8b72a872_c12dbd01, 0x0016ee87_b2d9c231_76c44f4a_7ef235f7,
    0x0016c4d8_c707341e_472d9e72_e2635198, 0x00169b70_4f28bb1b_fc8de88a_b118dace,
    0x0016724d_de72a687_d6df42ca_6ceeba78, 0x00164971_08ae5da3_b96180f4_065f3e18,
    0x001620d9_6239b443_a077c7e0_ef5e118c, 0x0015f886_80064009_0f53e866_0ff03d0e,
    0x0015d077_f798ae2c_59e3f72b_818126a0, 0x0015a8ad_5f0819d3_aed12341_391416be,
    0x00158126_4cfd62f7_c4baa3c4_89caa90f, 0x001559e2_58b285d6_0d34b3ed_e98059f6,
    0x001532e1_19f1f2f0_4f71fb72_878f863a, 0x00150c22_2915e799_8bdd6e60_a44650ed,
    0x0014e5a5_1f07c710_094ba295_6fafcc7b, 0x0014bf69_953f7424_6bccd0b3_7dad6cc6,
    0x0014996f_25c2ab6d_b48c322c_41fc2b87, 0x001473b5_6b245e0a_098e2c8e_f3b19bf6,
    0x00144e3c_00840cec_2384baf3_d97c71d7, 0x00142902_818d24b5_3f58c813_48e568ca,
    0x00140408_8a765a1b_706fad71_4faa8a43, 0x0013df4d_b80106dc_301dcd0e_9a91d6bc,
    0x0013bad1_a778873b_06223a50_175b130e, 0x00139693_f6b1980c_2573a353_3df68765,
    0x00137294_4409b54a_d81424b5_f1eb6728, 0x00134ed2_2e66793b_941065fe_7a39a4de,
    0x00132b4d_5534fc19_933e4b50_faec8b57, 0x00130805_5869344f_c6c0b101_e7da31cb,
    0x0012e4f9_d87d573c_fec805dc_c0b93bfe, 0x0012c22a_76713a83_1e7b30a7_aa50e8cd,
    0x00129f96_d3c9b5e1_3368fb89_bb56c30e, 0x00127d3e_92900598_47584384_a3d934f1,
    0x00125b21_55512d5a_c2c4622b_4061d951, 0x0012393e_bf1d5bc6_35cbb325_3d3a66fb,
    0x00121796_73874e67_5ccfb4e2_c00bb7ab, 0x0011f628_16a3b648_3581131f_bed0e06a,
    0x0011d4f3_4d089d07_f88de979_ea337964, 0x0011b3f7_bbccca7c_cba5bb61_a15af6bb,
    0x00119335_08872ade_ff04fc11_1fc5e76d, 0x001172aa_d94e357d_a9398bee_f0006ad3,
    0x00115258_d4b753fc_735247ca_bc7dc206, 0x0011323e_a1d64a1a_672da8b6_128b2f71,
    0x0011125b_e83c9e01_911e7fcc_f1d63651, 0x0010f2b0_4ff9011f_45a20f0a_a084576e,
    0x0010d33b_8196b984_db681e3b_eb25cc2c, 0x0010b3fd_261d0bd0_a9743035_a740604c,
    0x001094f4_e70ea59f_18a6a7a1_24c06943, 0x00107622_6e690883_97857ae3_97cad030,
    0x00105785_66a3f589_3ea60ad4_0a2dd13e, 0x0010391d_7ab0d93a_f3a4c70e_f6671301,
    0x00101aea_55fa3832_d82383b0_79940db5, 0x000ffceb_a4631c30_d1d4be06_84857715,
    0x000fdf21_124681b7_f8288753_6486861c, 0x000fc18a_4c76c632_b3bf64ed_7b0c5139,
    0x000fa427_003d169d_5b582ad9_7803652a, 0x000f86f6_db58deb7_197fa856_aef0a896,
    0x000f69f9_8bff38b8_e5dbeba6_540b7bf8, 0x000f4d2e_c0da5d92_5c80ea8b_1e6a6135,
    0x000f3096_290915ac_3d517e82_e7be8f45, 0x000f142f_741e2a30_5d05dd7a_c2f37e68,
    0x000ef7fa_521fd6d6_d10808a2_70ab277c, 0x000edbf6_73873c38_1eef11f8_4b55a967,
    0x000ec023_893fd2a4_37fb9514_69919e24, 0x000ea481_44a6dd7e_08924f89_f1f75750,
    0x000e890f_578adf1b_634d67d1_10c507a2, 0x000e6dcd_742b0d29_0ed9a5fa_cf065bd8,
    0x000e52bb_4d36c592_bd72a659_d7ebd249, 0x000e37d8_95cd03ee_b46fe2b7_2f014077,
    0x000e1d25_017bd76c_e9f4517e_ae12704b, 0x000e02a0_443fd949_5e734a73_16f541f1,
    0x000de84a_1283a3c1_775f5cd2_70ae4ff3, 0x000dce22_211f498c_1ffaca46_b1ebbb43,
    0x000db428_2557cdd4_74e56b71_66794931, 0x000d9a5b_d4de9cb6_bea8dd37_a7cb903a,
    0x000d80bc_e5d1043f_7f29f812_a70be84d, 0x000d674b_0eb7adec_558dbb74_08e359b9,
    0x000d4e06_068618ae_7bc805a7_f6778992, 0x000d34ed_849a136e_a0b3a36c_3afc7d1e,
    0x000d1c01_40bb3811_e13d7896_e624ab1e, 0x000d0340_f31a66ff_a2d7bb82_460b47b7,
    0x000ceaac_54514328_11167669_def51cf6, 0x000cd243_1d61ae8b_0003bb56_4b5034f9,
    0x000cba05_07b5473e_f4682f86_53b4c29f, 0x000ca1f1_cd1ce4f8_12f3c953_83be335f,
    0x000c8a09_27d0170e_b6e2ce41_34772c00, 0x000c724a_d26ca305_706c4d17_6abe9fec,
    0x000c5ab6_87f6038e_2af9787f_b98ffbdf, 0x000c434c_03d4e80e_3ad86872_19ce074f,
    0x000c2c0b_01d6b4a1_11d0e2ba_ace52299, 0x000c14f3_3e2d0299_59b6dbdf_c7b56601,
    0x000bfe04_756d2180_33cc6891_65da7ce9, 0x000be73e_648f9892_5b7bd370_0f8f9d40,
    0x000bd0a0_c8efa8ba_eaaa7a40_f5016295, 0x000bba2b_604acf0b_7d9df76f_0cc530a0,
    0x000ba3dd_e8c047b1_7426efe4_c45a4704, 0x000b8db8_20d09168_0d7fa0b6_9014711c,
    0x000b77b9_c75cf167_1c07faa3_90bac8aa, 0x000b61e2_9ba6f7ce_0dc5b9fd_aeb27e04,
    0x000b4c32_5d50048b_064c76f4_f6ff3d6a, 0x000b36a8_cc58ccbd_c6702369_a6fa5708,
    0x000b2145_a920e096_1de3cf2c_0b8fea6a, 0x000b0c08_b46631ad_a2a6d8d0_001ed60b,
    0x000af6f1_af4499dc_69e3e6d2_3f8a57a2, 0x000ae200_5b356288_7da7219e_aa040703,
    0x000acd34_7a0ecc6f_ca9429ee_e368c1fa, 0x000ab88d_ce0397ec_40882ed7_08dca2ee,
    0x000aa40c_19a28db1_e0d95289_7bdd630d, 0x000a8faf_1fd60806_74aa3b41_b66977cd,
    0x000a7b76_a3e37c72_a58f3dbf_a0ea518d, 0x000a6762_696b05ec_3289ff27_dc834c92,
    0x000a5372_3466ef78_fb28bbd8_d69f5055, 0x000a3fa5_c92b3f4a_9a5f8eaf_4955e655,
    0x000a2bfc_ec654252_4a7c1f2e_1f5792b9, 0x000a1877_631b184c_cb5f03e4_b78f9a2a,
    0x000a0514_f2ab4046_03f1e822_83834a4d, 0x0009f1d5_60cc2594_179e1f67_56281013,
    0x0009deb8_738bad49_a854c4eb_f0131b5e, 0x0009cbbd_f14ec41e_fd87d0f6_0ae5b5f9,
    0x0009b8e5_a0d0ecd1_c842af4e_1d60cfed, 0x0009a62f_4923cefb_3c60d8fb_36287246,
    0x0009939a_b1aec65c_36b1be42_afee0ebe, 0x00098127_a22e729f_27aaebae_645e32c1,
    0x00096ed5_e2b4478f_7a1bc46c_cf1fb076, 0x00095ca5_3ba61dc6_2d296c9b_e2ac9a24,
    0x00094a95_75bdc3cb_58ad8dd9_f36ad91c, 0x000938a6_5a088fac_52e77eb1_14936020,
    0x000926d7_b1e6f106_2e4500f9_c7ce87ac, 0x00091529_470c0384_45de430b_67352bc9,
    0x0009039a_e37d21d2_8f18125c_e8e61aaf, 0x0008f22c_51917903_66b73af9_713ad6cc,
    0x0008e0dd_5bf19c68_8f88e4c3_cb391d0d, 0x0008cfad_cd9719df_189d5cd4_bf8d6469,
    0x0008be9d_71cc0e8d_e0ed1d2d_17e2d9f6, 0x0008adac_142abc16_6e1b0e5f_e52d56a3,
    0x00089cd9_809d1e37_cbe2eca7_a3b4a809, 0x00088c25_835c80e3_299f6aec_abcdd918,
    0x00087b8f_e8f116c1_eb312180_e4f53fdf, 0x00086b18_7e31902c_e26d8aa0_1dc57d62,
    0x00085abf_1042b294_661c4302_4433b556, 0x00084a83_6c96f058_fb6877e1_d9980aa0,
    0x00083a65_60ee0114_468cdcaa_97826083, 0x00082a64_bb547a51_f761aff7_d88f8c18,
    0x00081a81_4a2368b8_66564085_e21a59cd, 0x00080aba_dbffe9a0_96420622_e4e50d54,
    0x0007fb11_3fdac51d_4f5cbf6b_175d0c73, 0x0007eb84_44f00871_07911a15_b11e7541,
    0x0007dc13_bac6a0f2_4c4237b6_35b73083, 0x0007ccbf_712ff75e_6181e2fe_32d00566,
    0x0007bd87_38478b99_ca9b80a7_91eec3d8, 0x0007ae6a_e07290de_6fbeb227_7fabf5a9,
    0x00079f6a_3a5f8a57_147c3e06_bcc1767e, 0x00079085_1705e827_d2b02127_699463cd,
    0x000781bb_47a5a4e3_4d5cac43_eb0dbf01, 0x0007730c_9dc6e36c_4ee44078_c1577076,
    0x00076478_eb398d43_85f99b9e_db448697, 0x00075600_0214f141_1489b088_5dc81fd8,
    0x000747a1_b4b762b9_a3cdbec2_b6dcb36e, 0x0007395d_d5c5d90e_b0a0c042_586357e5,
    0x00072b34_382b8fa9_c320503b_4e3719be, 0x00071d24_af19a662_448ee453_33c7dc03,
    0x00070f2f_0e06c24d_a65b8f3a_80148aff, 0x00070153_28aeaef9_8d228882_d9d070dc,
    0x0006f390_d312000f_b2696024_d19dab99, 0x0006e5e7_e175b363_2fca1388_29bb4e6c,
    0x0006d858_2862d366_e6312cf6_6aa41f69, 0x0006cae1_7ca61a0c_b3c4ac18_230ef320,
    0x0006bd83_b34f940d_2afbad6a_983be790, 0x0006b03e_a1b24497_7d619e6f_24574ab8,
    0x0006a312_1d63c969_4c7343a0_e2a8d9ce, 0x000695fd_fc3bff4e_12f7eaf2_f8600897,
    0x00068902_1454a705_d92dd8ac_b839010c, 0x00067c1e_3c090a92_e6164bdc_92b5cad0,
    0x00066f52_49f5a2ee_20236243_522f8452, 0x0006629e_14f7be21_cf80a87b_3345e489,
    0x00065601_742d25ca_7426412f_3e25ff2d, 0x0006497c_3ef3c5fd_61de446c_b184a87f,
    0x00063d0e_4ce95494_d45c4568_c3061daf, 0x000630b7_75eaf8e1_2d7fd077_79f14ca5,
    0x00062477_9214f3bf_0fd42b5c_9b81cae3, 0x0006184e_79c24812_0759ae8d_c3a63eb4,
    0x00060c3c_058c63a3_729fad65_b74b24ee, 0x00060040_0e4ac865_5e3114a6_3bd21009,
    0x0005f45a_6d12b619_0451a8f1_6844d10b, 0x0005e88a_fb36d458_a3062118_38bf09ce,
    0x0005dcd1_9246dd04_5a5e3935_8fa44bc6, 0x0005d12e_0c0f4711_c4f54a86_cbbaa8ad,
    0x0005c5a0_4298f1bd_fc9befca_5db3e00e, 0x0005ba28_1028d021_bd1bc59e_aa414825,
    0x0005aec5_4f3f9527_570568e6_079fcd81, 0x0005a377_da995fe2_24787196_70f16b51,
    0x0005983f_8d2d6847_31d54d93_f48aeed0, 0x00058d1c_422dac46_cc498c43_ef248178,
    0x0005820d_d5069d46_a8285f6d_851b3071, 0x00057714_215ecdfc_5102cfba_dc570ef3,
    0x00056c2f_0316a0a7_957561c8_6d009035, 0x0005615e_5647f5ac_a0a3ab27_1690f87d,
    0x000556a1_f745da8d_735d9c0d_f6450ba6, 0x00054bf9_c29c3942_6eee09b6_6bbb77cb,
    0x00054165_950f87f1_a3964d84_25be66e6, 0x000536e5_4b9c7904_94bf9532_0f2b2e60,
    0x00052c78_c377ab9c_24efc749_cd1de265, 0x0005221f_da0d5c62_5b95a435_36c7de35,
    0x000517da_6d0116b9_b6c60e47_80d6eec5, 0x00050da8_5a2d6649_bb0b2137_38ab2768,
    0x00050389_7fa388e8_736cfab3_d0df916e, 0x0004f97d_bbab20e0_93e3c913_576fa20d,
    0x0004ef84_ecc1e793_f06ae191_a21a4448, 0x0004e59e_f19b6079_faf5444d_3a1ae965,
    0x0004dbcb_a9208c79_fa8d1023_bef1655b, 0x0004d20a_f26f9da0_adf0fad4_4330fc24,
    0x0004c85c_acdbab31_0c0ce96f_fa05cb88, 0x0004bec0_b7ec660f_d4b5412e_d6756917,
    0x0004b536_f35dcd89_a4177845_afb694bf, 0x0004abbf_3f1fe473_3b5dd06e_0dd87613,
    0x0004a259_7b5666a3_b10ff87d_a9dd1972, 0x00049905_88587ec8_3bc696c6_6cd23efb,
    0x00048fc3_46b07c91_49d47211_998475c6, 0x00048692_971b8b38_989511f4_dae84309,
    0x00047d73_5a89685f_fe1e4012_0575100b, 0x00047465_721c1b48_981fd19f_13dba20b,
    0x00046b68_bf27ac62_12cb8a70_b2350728, 0x0004627d_2331dd31_baadbfc4_bb488d3d,
    0x000459a2_7ff1e091_0c6ea04a_62b89c2e, 0x000450d8_b7501343_7583af7b_3201c2a6,
    0x0004481f_ab65b4e2_f8e9135b_178f206f, 0x00043f77_3e7ca123_6b0acc3f_f6dffda7,
    0x000436df_530f096b_f816cd6c_a5814735, 0x00042e57_cbc72ec6_a8023233_105cd380,
    0x000425e0_8b7f1c25_939d7511_3d6e0c37, 0x00041d79_754060fd_7e259bf1_a5b6ced0,
    0x00041522_6c43cc35_86d2bd7e_72085635, 0x00040cdb_53f1276b_a5f7166e_c471cc0d,
    0x000404a4_0fdef28d_a95519fc_84083322, 0x0003fc7c_83d21fc6_63667d68_08880822,
    0x0003f464_93bdcfbe_c16232b6_4a1049d2, 0x0003ec5c_23c30e32_7be399cf_7649dfbb,
    0x0003e463_18308ed8_1629dff1_6c04272a, 0x0003dc79_55826a9b_dffb932e_e274651a,
    0x0003d49e_c061dd2d_ae4fd995_01b1e9cb, 0x0003ccd3_3da502e0_fef480b2_dd291cc2,
    0x0003c516_b24e96df_3b7e39c6_5c1dacbb, 0x0003bd69_038db1ab_cfe6cfe7_45185135,
    0x0003b5ca_16bd87f9_c953f752_cc8ede8c, 0x0003ae39_d16529d2_b1987ea0_831a0011,
    0x0003a6b8_1937420e_5c192b55_f31c8d0b, 0x00039f44_d411d61b_58d6622a_a962eb28,
    0x000397df_e7fe0617_c273e785_a27a296d, 0x00039089_3b2fcd3a_1c30857a_dc4245a1,
    0x00038940_b405c289_f4d83900_a85cde8b, 0x00038206_3908d9e8_03d4af65_bba61fc5,
    0x00037ad9_b0ec2565_75995671_1fa144dc, 0x000373bb_028c96ea_1cc20c33_3f7bdb87,
    0x00036caa_14f0c229_3d55969b_4a413737, 0x000365a6_cf489ee4_a7b7758e_eb14c8ca,
    0x00035eb1_18ed4b7d_d8ef5bbd_9ffef131, 0x000357c8_d960cfd4_d607a1e7_56b2501a,
    0x000350ed_f84de074_785f5d02_e12e8ff7, 0x00034a20_5d87a20b_e0e860d0_9cea7795,
    0x0003435f_f1096d34_c8656525_7f4ae244, 0x00033cac_9af69286_62d8bbd0_b16b8f38,
    0x00033606_439a1ef4_8c7086a0_ea710b34, 0x00032f6c_d366a07a_f65a27f6_98d81de6,
    0x000328e0_32f5eb14_0a03bbb5_56216a8a, 0x00032260_4b08ddfb_396fc183_a23b6f65,
    0x00031bed_0487293a_735cc355_ea9c134f, 0x00031586_487f1382_7220ab7c_b9c79e1f,
    0x00030f2c_0025404d_9c35ab11_c5360347, 0x000308de_14d4764d_2d9503e9_77f3ff1f,
    0x0003029c_700d6620_611abf5c_7fb2820b, 0x0002fc66_fb767155_514c548d_98ed0f0f,
    0x0002f63d_a0db71b3_47fb7c83_0f556f9e, 0x0002f020_4a2d80ce_345defc1_b5153c5a,
    0x0002ea0e_e182bfe2_ff528751_ea859903, 0x0002e409_51161ffc_75ac3979_07347d43,
    0x0002de0f_83472a60_807ba83d_44af1256, 0x0002d821_6299c945_63707444_4dbaf4ce,
    0x0002d23e_d9b610ce_b98c4109_c597ab6a, 0x0002cc67_d3680851_e8824f11_58d48dd7,
    0x0002c69c_3a9f73e1_c33fc4dd_f4b5111c, 0x0002c0db_fa6f9e21_143a2f65_3dc23d0a,
    0x0002bb26_fe0f225b_c8436db3_cf160eb4, 0x0002b57d_30d7b6e6_72c420cd_999b3d54,
    0x0002afde_7e45f7c3_e45fd7d0_2ed00336, 0x0002aa4a_d1f93190_8d288846_09f5bd51,
    0x0002a4c2_17b32cb3_63a972be_13da9fb0, 0x00029f44_3b57f8d4_0a345b66_99fcbeea,
    0x000299d1_28edb895_ebfefcec_9593c6b0, 0x00029468_cc9c6d98_0bc1d086_208d197c,
    0x00028f0b_12adc4b9_3dacb028_eeacd56d, 0x000289b7_e78ce2a0_86a976cc_0b4bfe7a,
    0x0002846f_37c63089_5b089588_567e731b, 0x00027f30_f0072953_76d79ac7_8724e43f,
    0x000279fc_fd1e26d6_0a45e1c8_f54af2c2, 0x000274d3_4bfa2f75_f4a00bea_263ce381,
    0x00026fb3_c9aac3fe_c88f81ab_e9490cbc, 0x00026a9e_635fadbe_547006b1_92a2d574,
    0x00026593_0668cce2_69b2694d_34eb937f, 0x00026091_a035e718_9e6882e9_2f14ca6e,
    0x00025b9a_1e56766f_c43c1a1d_6b1986ae, 0x000256ac_6e79787a_d037c0d6_93b60d96,
    0x000251c8_7e6d3db4_eeee8001_86bda567, 0x00024cee_3c1f3926_80b50608_73707efe,
    0x0002481d_959bd04a_b9c51d75_5e2297b7, 0x00024356_790e2b35_a24a6c9c_03c5afa2,
    0x00023e98_d4c004fa_327de5a1_08be3ad9, 0x000239e4_97197c50_471bdeec_980a7c51,
    0x00023539_aea0e47a_2aa78672_94285ed1, 0x00023098_09fa9669_7015459a_94e91c06,
    0x00022bff_97e8c222_db9cb757_5f8339cc, 0x00022770_474b4061_169a058a_6bef49b3,
    0x000222ea_071f6475_eb8ddd87_5f33ab4e, 0x00021e6c_c67fce69_c772acd1_00c984dd,
    0x000219f8_74a43d59_3dc57e61_d464a096, 0x0002158d_00e16210_4cc89d63_c32c26c5,
    0x0002112a_5aa8b1e3_1fae138a_990b1597, 0x00020cd0_718839c4_0c802ebb_e443f912,
    0x0002087f_352a7196_8bc672b4_35a2fa4f, 0x00020436_95560fbe_e80db756_ebaa32ae,
    0x0001fff6_81eddcee_63a2b2b4_8e30ba86, 0x0001fbbe_eaf0882b_92f6cdff_1b4efd24,
    0x0001f78f_c0787b16_aa4fe607_30dd082b, 0x0001f368_f2bbae69_7d8c79e5_434cb1f5,
    0x0001ef4a_720b7eb2_f0eecc8c_7c628168, 0x0001eb34_2ed4814d_9a0a9f9f_b0102fbd,
    0x0001e726_199e5991_501a6e6b_35b99a27, 0x0001e320_230b8e3f_6b2a6ed0_5ed4e295,
    0x0001df22_3bd95f29_71b11aa9_93479358, 0x0001db2c_54df9b11_f4569e2a_85bc79d2,
    0x0001d73e_5f1075c7_57d63e71_0733e71e, 0x0001d358_4b785e78_4d0e9e54_2cd2b360,
    0x0001cf7a_0b3dd641_b77fb5f5_0379967c, 0x0001cba3_8fa146f5_c29f5b1b_12178675,
    0x0001c7d4_c9fcda1b_e6975c75_67d8635a, 0x0001c40d_abc45029_9d2a6fe5_b98a1f0e,
    0x0001c04e_2684d7f3_87a78b7d_ce1f4f1d, 0x0001bc96_2be4e656_c6fdb148_b204cffb,
    0x0001b8e5_ada40e1a_472cbed2_3941d8a1, 0x0001b53c_9d9ad807_bf7a721a_761f40a0,
    0x0001b19a_edba9b3c_28fd8dbb_01e75939, 0x0001ae00_900d55af_6d3bd4f5_2ad3bef3,
    0x0001aa6d_76b584f3_0ec27da7_07bef21b, 0x0001a6e1_93edff27_8dcbb13f_a83cdf64,
    0x0001a35c_da09cc28_4b2ec636_7cc13218, 0x00019fdf_3b73feed_ac0400c6_e24a5c24,
    0x00019c68_aaaf8f25_408fe33e_8879d080, 0x000198f9_1a5732ff_b135638d_157a1dd7,
    0x00019590_7d1d3934_3459bc76_b2172948, 0x0001922e_c5cb6339_50500454_972e4a08,
    0x00018ed3_e742bfb2_ac8e3931_ac88a6d9, 0x00018b7f_d47b8513_b59909d1_fb7d4275,
    0x00018832_8084ec76_d73f4c57_2ae52934, 0x000184eb_de850ca9_10e9cd40_4557d0d1,
    0x000181ab_e1b8b569_a7efebfe_570d2ad6, 0x00017e72_7d734add_bc0d54c9_77ca3624,
    0x00017b3f_a51ea137_82411152_e0f3d79a, 0x00017813_4c3ad890_ea8a22e9_da49bd0b,
    0x000174ed_665e38f9_7521e034_7a514bbb, 0x000171cd_e7350eb6_fc006645_2a838f07,
    0x00016eb4_c28186b9_35a39026_19b86e56, 0x00016ba1_ec1b8b3f_b63d1878_9dd6d964,
    0x00016895_57f0a0b2_3498c60d_1abe8095, 0x0001658e_fa03c2aa_d837cdee_46d1b13d,
    0x0001628e_c66d4132_564aeacf_510a3036, 0x00015f94_b15a9e2d_a3610aaf_088955c2,
    0x00015ca0_af0e6afc_ffccdf63_04e3f878, 0x000159b2_b3e0264c_24f0152e_0ea272ad,
    0x000156ca_b43c1a13_59c77316_90728aae, 0x000153e8_a4a339c9_353fb2f7_5d021cf7,
    0x0001510c_79ab00c4_d50772d2_0e404897, 0x00014e36_27fd50d0_4fbf3d52_f459c660,
    0x00014b65_a45850eb_29954c50_00c9033c, 0x0001489a_e38e4c3c_928754ec_276cfbe0,
    0x000145d5_da859135_35b16185_eef142b0, 0x00014316_7e3850e0_613d7949_bb7969aa,
    0x0001405c_c3b47e64_4eb497be_e8e92ef6, 0x00013da8_a01baeb1_539e3f8a_f9018521,
    0x00013afa_08a2f85f_c288c289_9d4f47b7, 0x00013850_f292d3bc_44c12dd5_b2239a28,
    0x000135ad_5346fb02_752ea211_8e9d1474, 0x0001330f_202e4ac5_84f1bec0_5940a624,
    0x00013076_4ecaa286_b295aa73_16367b9e, 0x00012de2_d4b0c579_5ccd2888_632fdf7f,
    0x00012b54_a7883b74_79e317e3_8db4dd0f, 0x000128cb_bd0b3211_3d32a3ed_e41feed2,
    0x00012648_0b065df6_b428620b_90e477ff, 0x000123c9_8758dc52_247a890c_7b44f095,
    0x00012150_27f4147b_f57365aa_cf80134e, 0x00011edb_e2db99c8_ee56267d_f00ab4b9,
    0x00011c6c_ae250d87_9413128c_6483aafd, 0x00011a02_7ff80129_70ad377d_597b70dd,
    0x0001179d_4e8dd898_0ee096f6_a203cc3e, 0x0001153d_1031acb5_74c4d59b_d90daeec,
    0x000112e1_bb402e07_e855690b_e7bc8167, 0x0001108b_46278790_c8f53cca_3c4b7b21,
    0x00010e39_a76741ce_4930bfdf_81fcfd40, 0x00010bec_d59025e7_d42e45d2_8607fe22,
    0x000109a4_c7442104_ea699d0d_b855c535, 0x00010761_733627ce_4184b281_a9c67812,
    0x00010522_d02a1a18_f3240e03_0c7f7e37, 0x000102e8_d4f4a6bb_86fae42d_c3f6edf5,
    0x000100b3_787b2f8c_a4576929_ee71f9ca, 0x0000fe82_b1b3ad8b_37acfb37_a23de4b3,
    0x0000fc56_77a4952f_d8c6a40f_346df94c, 0x0000fa2e_c164bae7_3e79549b_cfbeed27,
    0x0000f80b_861b37b5_8cda1f0b_262185c3, 0x0000f5ec_bcff4e02_4b298f4e_0ec22619,
    0x0000f3d2_5d584e8c_ced219a2_8f954fb1, 0x0000f1bc_5e7d7d88_e9046948_7849e391,
    0x0000efaa_b7d5f7e3_a4a926c7_597a4cb1, 0x0000ed9d_60d898af_e28c94e0_fa8dbd5c,
    0x0000eb94_510bdeba_a1d52520_decde9ab, 0x0000e98f_8005d246_c302e0a3_014fbd49,
    0x0000e78e_e56beaf0_13e236dd_6ffdd213, 0x0000e592_78f2f5b5_730972a6_4640811c,
    0x0000e39a_325efb29_d9a4bd0e_d1fa0d71, 0x0000e1a6_098325cc_1a8135b3_30631659,
    0x0000dfb5_f641a885_25744081_dda0753e, 0x0000ddc9_f08ba54c_9e68b977_a62c9f48,
    0x0000dbe1_f06113f3_97884711_ead20417, 0x0000d9fd_edd0a915_3e238403_a6aabf04,
    0x0000d81d_e0f7bd2d_4a282fc2_3aa86ea6, 0x0000d641_c20233d4_0021037f_6bb48b44,
    0x0000d469_892a631f_95e72dd8_a6e0843a, 0x0000d295_2eb8fb2a_ca59d2a3_903a158a,
    0x0000d0c4_ab04edc0_809c3d88_d059f8f5, 0x0000cef7_f673562c_2f87bd4c_5b77e12f,
    0x0000cd2f_0977612e_f62a5a73_07f3d27c, 0x0000cb69_dc923519_2657ce25_dad47e5a,
    0x0000c9a8_6852da08_167e4582_3ab903fb, 0x0000c7ea_a5562248_0c1c99b2_238750ec,
    0x0000c630_8c4692da_1063b5f0_06b9c5b4, 0x0000c47a_15dc4c1d_80b8e9bf_668badac,
    0x0000c2c7_3adcf29d_2cfadee6_3698c105, 0x0000c117_f41b97ff_d596d7d5_0b90506f,
    0x0000bf6c_3a78a41b_dba7bbef_2cf8fb62, 0x0000bdc4_06e1be2d_f5844b4a_556a2a70,
    0x0000bc1f_5251b632_ba4d9acb_9a413259, 0x0000ba7e_15d06e62_d73ab3bf_7398e51d,
    0x0000b8e0_4a72c4d1_c189def2_ac1a67e6, 0x0000b745_e95a7d2e_b82bc2ae_355ec477,
    0x0000b5ae_ebb62aa7_e8680c8e_2ae8b1c5, 0x0000b41b_4ac119ef_88e6e3c2_ff04bb4a,
    0x0000b28a_ffc33b62_beb5d5a9_c715b648, 0x0000b0fe_04110d52_200a5595_5d74a2a2,
    0x0000af74_510b866b_a8af40e5_ab564e48, 0x0000aded_e0200045_f43621ed_9171b1d1,
    0x0000ac6a_aac8220c_92302673_d5185c5e, 0x0000aaea_aa89cb4d_48dde99a_096de026,
    0x0000a96d_d8f6fee6_1af04c70_0eb4b8c5, 0x0000a7f4_2fadce13_e51fa43e_75c2732f,
    0x0000a67d_a85843a1_68898169_70a2e013, 0x0000a50a_3cac4f36_96f03d85_231a9742,
    0x0000a399_e66bb0c7_f6225a97_d8047c4d, 0x0000a22c_9f63e425_effa8864_26c70eea,
    0x0000a0c2_616e0cab_e493deba_4a53e371, 0x00009f5b_266ee10e_d478850b_3d420e86,
    0x00009df6_e856974b_78bb9798_97cf3b7e, 0x00009c95_a120d0b3_9f19a171_36a6fbeb,
    0x00009b37_4ad4861a_a06577c4_73cb6eab, 0x000099db_df83f420_c7b1a6c4_da886379,
    0x00009883_594c879d_80d0f228_ed0ae1a9, 0x0000972d_b256ca28_24f2ab26_8ac9d361,
    0x000095da_e4d64ebf_3c49cb5e_1219a2a6, 0x0000948a_eb099e8e_0bd7df60_470647c9,
    0x0000933d_bf3a25d0_469ed420_b96c23c8, 0x000091f3_5bbc20d3_b9a6b091_b89c4f9e,
    0x000090ab_baee8917_ca6e27ab_4820a80f, 0x00008f66_d73b028a_9f86bf10_f35413de,
    0x00008e24_ab15c8e3_cb470340_4714f0b2, 0x00008ce5_30fd9d1c_50a6eb81_22702f88,
    0x00008ba8_637bb303_da842590_7ea0d977, 0x00008a6e_3d239ef2_fdb58304_ce90784e,
    0x00008936_b893439a_5e7e3090_347418a7, 0x00008801_d072bfee_921ab960_9aa0778a,
    0x000086cf_7f745d30_954b1ec8_cf2061d0, 0x0000859f_c0547d12_b0e67df1_2d97b71d,
    0x00008472_8dd987f9_a5adda63_bf2f721d, 0x00008347_e2d3db59_f8bcacb9_1ba02d32,
    0x0000821f_ba1db831_3a1ec853_57819527, 0x000080fa_0e9b319b_1f3c09ce_00462b5c,
    0x00007fd6_db3a1b82_4af30971_21665aa4, 0x00007eb6_1af1f96c_9d64c165_a15d230d,
    0x00007d97_c8c3ed62_e59bb67f_7e2e50e0, 0x00007c7b_dfbaa6f3_cf61bc0b_9a42e43e,
    0x00007b62_5aea5251_e7bfdf08_68e66450, 0x00007a4b_3570878c_92cc6368_ddafc770,
    0x00007936_6a7439e3_cd930656_05b55b80, 0x00007823_f525a736_970beab4_97eed64e,
    0x00007713_d0be478b_db3db15f_ff89a11b, 0x00007605_f880bcb5_bbcf4473_cb00e300,
    0x000074fa_67b8c20f_1175cc7f_60828d74, 0x000073f1_19bb1c53_01d31f7f_2d0684c9,
    0x000072ea_09e5898e_8580bbd3_7ec07b5c, 0x000071e5_339eb12b_ba2b0d09_999b956c,
    0x000070e2_92561416_dcc84d09_85f9ddb7, 0x00006fe2_2183fcfc_c81dd1fd_43770413,
    0x00006ee3_dca970a2_d3edffef_826742f2, 0x00006de7_bf501e57_f1506494_59048796,
    0x00006ced_c50a507e_e0dcbbd1_9022c925, 0x00006bf5_e972dd31_5f78bc52_8b37f8fc,
    0x00006b00_282d16fc_26bf94a2_55248fbf, 0x00006a0c_7ce4bdb3_9e20f2d2_4aa95799,
    0x0000691a_e34def61_19fc4a82_efe9994f, 0x0000682b_57251948_8623cf1c_e104e5ce,
    0x0000673d_d42ee906_59594210_1583d954, 0x00006652_56383dc5_af7d46ee_dea72a90,
    0x00006568_d916198e_68506917_9166dbdd, 0x00006481_58a592ab_28cb6043_89583833,
    0x0000639b_d0cbc527_1d3a6aa4_67cf8f57, 0x000062b8_3d75c463_5a6dc421_d28fa3c4,
    0x000061d6_9a988cc3_bc775ab3_98ced3fb, 0x000060f6_e430f573_2193dfa7_8ea821a5,
    0x00006019_1643a23e_e0033cc9_88ab7f22, 0x00005f3d_2cdcf589_55ba42c8_fd10c4da,
    0x00005e63_24110253_70fd1bc5_a6b7a9b5, 0x00005d8a_f7fb7e5d_1117a98e_3656fe84,
    0x00005cb4_a4bfb45c_1e8e7abd_2c2ae93e, 0x00005be0_2688764a_3a486c6c_48f9f2a2,
    0x00005b0d_79880fc8_e3565f9a_ed66a615, 0x00005a3c_99f8389b_f323a18b_ea9f11c8,
    0x0000596d_841a073a_4ffec538_cabfab90, 0x000058a0_3435e374_b60fb170_e6f15438,
    0x000057d4_a69b7932_76f4933f_942188bd, 0x0000570a_d7a1ab44_106436b4_7cb111cd,
    0x00005642_c3a6864b_7a590112_7d3b67e0, 0x0000557c_670f33ba_0d6c66ab_03c4e6ca,
    0x000054b7_be47ece3_e22f3c35_5920ddfc, 0x000053f4_c5c3ee28_8a6faf32_1858d2d1,
    0x00005333_79fd6a31_058202d3_78f15730, 0x00005273_d7757d42_d0c566e3_659d976a,
    0x000051b5_dab420a7_f5c25c29_6c0c6d42, 0x000050f9_80481e2b_f7641dd5_8a531042,
    0x0000503e_c4c703ad_7ff27163_3c603bdd, 0x00004f85_a4cd16c4_b1950e33_cb73e964,
    0x00004ece_1cfd487d_fb4d83b9_f81c54c8, 0x00004e18_2a012929_5478206e_33027491,
    0x00004d63_c888dc3d_c107dcd4_a0960046, 0x00004cb0_f54b0c51_00d4b498_55e74149,
    0x00004bff_ad04df23_4c772415_2f513cb5, 0x00004b4f_ec79e9bf_024eb28f_4020712c,
    0x00004aa1_b07424ac_267488c0_6720f4ae, 0x000049f4_f5c3e037_987e1046_a631dd0d,
    0x00004949_b93fb8cd_e2167acd_5e837fe4, 0x0000489f_f7c48b69_8198d77d_c7e32bd7,
    0x000047f7_ae356a14_93f70a4d_72ac8fa5, 0x00004750_d97b907d_c15c8b1a_47addb84,
    0x000046ab_768658a0_501e4a20_7fac639c, 0x00004607_824b2f7f_41ab742e_fef93224,
    0x00004564_f9c589f3_5d551308_3b4818d3, 0x000044c3_d9f6d98c_0ce4ad90_7db00b86,
    0x00004424_1fe68182_ef1c17bd_6b03a4cd, 0x00004385_c8a1cbc2_045a93a6_0b471fab,
    0x000042e8_d13bddfc_59c53b8e_26250b87, 0x0000424d_36cdaed9_1772684c_1bfe1701,
    0x000041b2_f675fb30_d63967ee_1cec7a80, 0x0000411a_0d593b5d_21e95e03_c0e1bb5a,
    0x00004082_78a1989a_0ccb9164_da0cb6ed, 0x00003fec_357ee279_b976baaf_7c9aceb7,
    0x00003f57_41268469_c01a1aff_8734232b, 0x00003ec3_98d37b4a_54883b8b_a320ef2a,
    0x00003e31_39c64b17_126a34d9_3065c34c, 0x00003da0_2144f4a1_55253f14_a10753f5,
    0x00003d10_4c9aeb5c_011d14c9_6f49fcc2, 0x00003c81_b9190b38_a41e5daf_6d587050,
    0x00003bf4_64158e95_d2dce886_40dd24cf, 0x00003b68_4aec043e_a991f0ff_51250eac,
    0x00003add_6afd457b_55e7097e_66f3dc7f, 0x00003a53_c1af6c32_907a7ffe_248c56f6,
    0x000039cb_4c6dc91b_ec6a39a4_01e8cda8, 0x00003944_08a8da02_e3720984_908f6b64,
    0x000038bd_f3d6401a_854a74c1_ab9d0787, 0x00003839_0b70b661_b114a886_5eb5fca0,
    0x000037b5_4cf80817_bfc01d6d_777e08a2, 0x00003732_b5f10741_8675ff95_e13b94cc,
    0x000036b1_43e5833e_9835f309_5b44fe9f, 0x00003630_f4643f6e_adef3125_53cd8376,
    0x000035b1_c500e9e7_1c804569_7533df82, 0x00003533_b3541238_4026de6a_c7b424a2,
    0x000034b6_bcfb2042_c5083aac_6f664983, 0x0000343a_df984b1c_b499b0c7_88c4511c,
    0x000033c0_18d29006_2fcfae9a_34ede23b, 0x00003346_6655a96d_be184c2a_88b7d3f4,
    0x000032cd_c5d20604_19453485_01c9bcdc, 0x00003256_34fcbfdf_5ea7311f_dbd5d89f,
    0x000031df_b18f93ad_8dbc1335_d1c9755c, 0x0000316a_3948d7f6_3cee0a1c_73ca37be,
    0x000030f5_c9eb746b_6d01add5_6e2ebbae, 0x00003082_613ed949_63ee2200_4d3a63ba,
    0x0000300f_fd0ef6c5_77f8b6e5_152b3547, 0x00002f9e_9b2c348b_b40b5491_4798d827,
    0x00002f2e_396b694b_3e5ac6f2_b8bf1363, 0x00002ebe_d5a5d251_6a8fb180_3416fa72,
    0x00002e50_6db90b33_60c28559_e29678d4, 0x00002de2_ff870586_42b84ddd_6882f42c,
    0x00002d76_88f600a5_b8eb8576_b66120c7, 0x00002d0b_07f08188_d1096701_b80912ec,
    0x00002ca0_7a654aa5_17a9575d_c405c7cd, 0x00002c36_de4753df_d7210ee5_7f58c63c,
    0x00002bce_318dc28d_65751b58_9e93866f, 0x00002b66_7233e17e_6b82286c_8176ddf0,
    0x00002aff_9e39191b_0f9837b1_4a515fea, 0x00002a99_b3a0e78b_eddd8fc7_29f3f8d5,
    0x00002a34_b072d8f0_c8ebaf07_bafaf9ac, 0x000029d0_92ba7fa4_dd34f6ce_3c74e1db,
    0x0000296d_58876c90_c1de1274_3fa58420, 0x0000290a_ffed2789_c1d24fec_1b366d0e,
    0x000028a9_870327be_97f637a4_8cf74094, 0x00002848_ebe4cc31_7977ae16_f037df48,
    0x000027e9_2cb1543f_5956cb11_0f8fb5ae, 0x0000278a_478bd834_505e597a_cadadd5c,
    0x0000272c_3a9b41ed_14de9e0c_a9a14e91, 0x000026cf_040a4585_6d98942d_49d02677,
    0x00002672_a2075a13_8b6345fe_e3888ece, 0x00002617_12c4b270_35303f92_7b3f797c,
    0x000025bc_5478360b_b22f5d42_a70de82e, 0x00002562_655b79cf_5ded5a6b_03184652,
    0x00002509_43abb90b_d2639012_bfbf4fb0, 0x000024b0_eda9ce73_940a42b7_72f7d5bd,
    0x00002459_619a2d22_2c19b339_080b0bfa, 0x00002402_9dc4d9af_9d40e0ff_fc44e88e,
    0x000023ac_a0756350_1f338adb_e4364ad7, 0x00002357_67fadd00_0d8b80d1_7e8c1469,
    0x00002302_f2a7d6bb_f693c325_8ae108b6, 0x000022af_3ed256c4_b6ae3a6c_8927a506,
    0x0000225c_4ad3d2ef_8d1f094f_eea5f88e, 0x0000220a_15092a02_17229317_e569f088,
    0x000021b8_9bd29d1a_1e4d51e6_1fa8bb42, 0x00002167_dd93c921_274e7cf3_9ded625f,
    0x00002117_d8b3a04b_ae484a19_985c5381, 0x000020c8_8b9c63a3_fe0a467e_4a03c804,
    0x00002079_f4bb9ca0_8f93d872_907b2d74, 0x0000202c_128216c5_df5e786e_b6b5a469,
    0x00001fde_e363d953_a60890b5_09afe153, 0x00001f92_65d820fd_62133a79_d6f03b4a,
    0x00001f46_985959ae_207e3c94_2a417d06, 0x00001efb_79651857_7226c2b3_28041021,
    0x00001eb1_077c14cb_7be63ceb_7d9cdd61, 0x00001e67_412223a2_0f87b631_7693feab,
    0x00001e1e_24de3028_bbc2b509_5a09e228, 0x00001dd5_b13a365d_c183646b_728d60d1,
    0x00001d8d_e4c33cf5_dce05396_5507f73e, 0x00001d46_be094f6c_d036925b_8ea783ce,
    0x00001d00_3b9f7820_9ffd4c63_e288d39f, 0x00001cba_5c1bba77_6dfa4903_dc082a8b,
    0x00001c75_1e170d0f_e298de8a_ffb4808a, 0x00001c30_802d53fc_133cf78a_c04c587d,
    0x00001bec_80fd5b06_d483be72_1b8c7a80, 0x00001ba9_1f28d003_677b6013_0f78d682,
    0x00001b66_59543d27_70f31843_be2c0b47, 0x00001b24_2e27036f_2a1c64d9_fc42aa12,
    0x00001ae2_9c4b550b_b9cdcac9_327bb9b6, 0x00001aa1_a26e2fdb_a5cf0f3c_11543823,
    0x00001a61_3f3f57ed_4bae2329_d555eeed, 0x00001a21_7171520b_50b3432e_213a68ca,
    0x000019e2_37b95e52_f8a1f75f_38c0d371, 0x000019a3_90cf72d4_530baf8d_40d876e5,
    0x00001965_7b6e363c_2f0fafca_c7a87889, 0x00001927_f652fa87_c57adf68_0438ee47,
    0x000018eb_003db7c2_0950d1b3_dff30385, 0x000018ae_97f106ca_8ede0bec_f40c5e94,
    0x00001872_bc321c25_f98a1ede_4c69e446, 0x00001837_6bc8c2d7_e0b6a4bd_2c5de4fc,
    0x000017fc_a57f5746_1c0e950b_8ce17712, 0x000017c2_6822c225_67bfa893_fd6d9bac,
    0x00001788_b282736f_512db714_76d26d96, 0x0000174f_83705d61_5cc60eec_20f05dbc,
    0x00001716_d9c0ef85_55aec529_b772573b, 0x000016de_b44b11c2_b823e1ba_e4789770,
    0x000016a7_11e81f79_276a1846_6f8b40be, 0x0000166f_f173e2a3_e0547279_76f01e27,
    0x00001639_51cc8f06_196fec51_1bd68b94, 0x00001603_31d2bd60_41fd863c_370484fb,
    0x000015cd_906966ae_10f8bbe2_09d6f2e1, 0x00001598_6c75df6d_557da0f9_b9f6a7c1,
    0x00001563_c4dfd2ed_79f71ff9_1da9a023, 0x0000152f_98913ea7_ab92f886_68739a41,
    0x000014fb_e6766d9f_978e2596_2d845753, 0x000014c8_ad7df3cc_b0014504_8d0ee68a,
    0x00001495_ec98a98b_e9e97453_ecaab17e, 0x00001463_a2b9a719_e63ed81c_1654aa3d,
    0x00001431_ced64015_77feada8_ddb44252, 0x00001400_6fe5ff0a_7923585e_62e19275,
    0x000013cf_84e2a104_e09956c1_b2818beb, 0x0000139f_0cc8112c_0b546d8d_ec3f2209,
    0x0000136f_06946466_2abca217_63eda8f4, 0x0000133f_7147d503_cabed076_91fdda91,
    0x00001310_4be4be73_61e0c59b_61a5cb80, 0x000012e1_956f98fc_ddccc98d_d35cf3dd,
    0x000012b3_4ceef585_1edc72d2_66e954e9, 0x00001285_716b7959_553e7136_c7560a86,
    0x00001258_01efda02_3266bc45_4af100b9, 0x0000122a_fd88d91e_e18c3853_97c1f326,
    0x000011fe_63454047_ba0a74a1_c723820d, 0x000011d2_3235dcf8_9e919d5b_6db64a8e,
    0x000011a6_696d7c82_fc221d92_bb1c2be1, 0x0000117b_0800e807_5be4b78f_48a3fa2d,
    0x00001150_0d06e076_7b030d16_076d0d37, 0x00001125_77981a99_dbb7adb5_fbaaed47,
    0x000010fb_46cf3b23_c2dfc6b6_0f632137, 0x000010d1_79c8d2c6_956b7f0b_4c7bb0c9,
    0x000010a8_0fa35a53_891ce1d4_52953b1c, 0x0000107f_077f2ee0_9c17fb47_04307202,
    0x00001056_607e8df5_c6d976d8_5fd2ba14, 0x0000102e_19c591c1_5c3ba1bc_815e61f9,
    0x00001006_327a2d53_8b4432be_25c8098f, 0x00000fde_a9c428e0_f6879fea_13a90747,
    0x00000fb7_7ecd1e0c_55011bb3_dd52ec17, 0x00000f90_b0c07437_10508e1e_f7a43a04,
    0x00000f6a_3ecb5cd8_d4620329_91947cfa, 0x00000f44_281ccfde_04941646_7396cdd5,
    0x00000f1e_6be5880d_0a84db30_fe5989bf, 0x00000ef9_0957ff72_72bea6e2_bb0e897a,
    0x00000ed3_ffa86bd3_cb8fe7fd_73366fe4, 0x00000eaf_4e0cbb29_3a6af4a8_1b810b46,
    0x00000e8a_f3bc901d_bc3c54b8_b6c0626a, 0x00000e66_eff13e96_05379a22_6e66db62,
    0x00000e43_41e5c83d_f4ac4f0e_39bd6072, 0x00000e1f_e8d6d91c_9185e0d6_58c75d7d,
    0x00000dfc_e402c42e_842ab962_78f4c0fb, 0x00000dda_32a98007_027fed2c_6dceb460,
    0x00000db7_d40ca377_22e80394_e431e3a3, 0x00000d95_c76f623b_8b246935_4899d0f5,
    0x00000d74_0c1689b0_70121099_3529bf31, 0x00000d52_a1487d8b_db4aa54f_1e700fff,
    0x00000d31_864d349e_2bc47f9e_a14ccf6c, 0x00000d10_ba6e3598_c69c3c7b_d2aa298c,
    0x00000cf0_3cf693da_ed437d93_532407c9, 0x00000cd0_0d32ec44_ae60e09b_c3f70929,
    0x00000cb0_2a71620f_e6bdb387_ac566341, 0x00000c90_94019baf_47ae4cd0_093eb3b9,
    0x00000c71_4934bfb3_58723bec_ce4e38fb, 0x00000c52_495d71b5_6819be3e_b9d7fc89,
    0x00000c33_93cfcf48_658e083e_3c47fafa, 0x00000c15_27e16cef_936a01c7_0afdd8ad,
    0x00000bf7_04e9531b_0d610ee0_85c9be39, 0x00000bd9_2a3ffb2a_15016481_9d90a7e8,
    0x00000bbb_973f4c73_1baf3a94_b0078bd5, 0x00000b9e_4b429951_7fc5e9fe_19d6322d,
    0x00000b81_45a69c38_f2dbaeb0_63a79b2a, 0x00000b64_85c974ce_7f345afc_3953267b,
    0x00000b48_0b0aa507_227eca5a_2188bad4, 0x00000b2b_d4cb0e4b_f4084ef9_88c52e0d,
    0x00000b0f_e26ceea3_cca0ae7d_7f731d63, 0x00000af4_3353dde2_6678878c_e79a2e91,
    0x00000ad8_c6e4cadc_eb532b4b_1bb6e667, 0x00000abd_9c85f8a3_e7741380_ba323ace,
    0x00000aa2_b39efbc2_97bf2843_9db97b50, 0x00000a88_0b98b783_8991fe5a_8ae13343,
    0x00000a6d_a3dd5b3a_82eb1a7e_29783024, 0x00000a53_7bd85f93_a9831506_e7f681b4,
    0x00000a39_92f683e7_df8a359f_d75ec7dd, 0x00000a1f_e8a5cb96_4ccbc74a_d4faefe5,
    0x00000a06_7c557b63_0b06fa73_e61b15d1, 0x000009ed_4d7616da_ec5bad11_f1f7a671,
    0x000009d4_5b795dbc_52b7dff3_7982ca0b, 0x000009bb_a5d24965_0f40fc67_ff7855e4,
    0x000009a3_2bf50a45_40c2568b_f805c392, 0x0000098a_ed570557_28388ea6_c2fdffbb,
    0x00000972_e96ed19b_ea9f9759_d9ee4c19, 0x0000095b_1fb4359d_373736e7_70cb1c2c,
    0x00000943_8fa024f3_c97fd7a6_c05d98f4, 0x0000092c_38acbdd2_be3f66e6_80d7d64e,
    0x00000915_1a554697_b2ebda14_343b419b, 0x000008fe_34162b5f_a6e6b812_361dc1c1,
    0x000008e7_856cfba0_9602b848_8a96b822, 0x000008d1_0dd867c7_c3da2a3e_89797bad,
    0x000008ba_ccd83edc_af8a677f_351d83a7, 0x000008a4_c1ed6c28_a7760e40_bb1dc49f,
    0x0000088e_ec99f4e2_f4bd2dd2_b68b031c, 0x00000879_4c60f5e1_9627e647_b9445306,
    0x00000863_e0c6a14e_824d4336_cefc6c87, 0x0000084e_a9503c61_68cd4de2_7f6c4665,
    0x00000839_a5841d1d_ea82759d_b3cac1db, 0x00000824_d4e9a816_409b7dfd_311410af,
    0x00000810_37094e32_4a9c2157_75d897f5, 0x000007fb_cb6c8a7a_fb4f8356_158c7f73,
    0x000007e7_919ddfea_1cc46afc_80573855, 0x000007d3_8928d73e_63780599_de0ef883,
    0x000007bf_b199fcd3_c8e0acaf_934e983a, 0x000007ac_0a7ede80_2596cffd_8344de90,
    0x00000798_93660974_0366bab1_77993fca, 0x00000785_4bdf081f_9fa26f39_95cc0b2c,
    0x00000772_337a601c_16174883_b78f63e1, 0x0000075f_49c99018_ad177196_1ed8bc8f,
    0x0000074c_8e5f0dcc_3b13957a_9830a6c5, 0x0000073a_00ce43ea_9e4d697c_eb82c9b5,
    0x00000727_a0ab901e_3f37e2d1_b6cbf8ca, 0x00000715_6d8c4105_962606ec_abc1f3d5,
    0x00000703_67069434_acf5532d_dae70c51, 0x000006f1_8cb1b43a_956cb52e_67f9953a,
    0x000006df_de25b6aa_cd14f8e6_dd57b310, 0x000006ce_5afb9a2a_875b6d3d_791e889e,
    0x000006bd_02cd4481_d6db4a52_5e11f778, 0x000006ab_d53580b0_aeb61f2b_a562e0d8,
    0x0000069a_d1cffd07_b4ef3644_f9d9b333, 0x00000689_f8394944_dec97a0e_b842a1fa,
    0x00000679_480ed4b3_d032eba8_9676b374, 0x00000668_c0eeec51_f754372c_8edfee37,
    0x00000658_6278b8f6_5d6659c1_4141cef2, 0x00000648_2c4c3d7d_25fba678_1caad21e,
    0x00000638_1e0a54f6_b5f4bfc4_6dd35d4a, 0x00000628_3754b0da_7b65542d_c712bc0e,
    0x00000618_77cdd73d_4fb795d3_0bcf6496, 0x00000608_df19210b_6d687d74_9b2e27be,
    0x000005f9_6cdab845_f2c1f31c_80e9ab78, 0x000005ea_20b79643_eb02f02c_0d8ea071,
    0x000005da_fa5581f6_d77098a7_9065c9c6, 0x000005cb_f95b0e32_b1d6241b_ee3368b8,
    0x000005bd_1d6f97f9_6204397f_3b2e59f7, 0x000005ae_663b44c9_9feb1d06_100b39d0,
    0x0000059f_d36700f1_3bf5bb23_bed3ae04, 0x00000591_649c7de2_c75638dc_82c876a0,
    0x00000583_1986308e_95ff3f46_ee1505d5, 0x00000574_f1cf4fbf_140fb6a5_d0f1a113,
    0x00000566_ed23d278_688114f6_391fa77d, 0x00000559_0b306e5b_5ef2c436_8862c33e,
    0x0000054b_4ba2960b_9277761c_8758645a, 0x0000053d_ae287798_d3537d79_4b0b6985,
    0x00000530_3270faeb_c1a5793b_3a93a5fd, 0x00000522_d82bc035_96fcc1e8_f319c58d,
    0x00000515_9f091e63_18eb20a3_a02ded6d, 0x00000508_86ba2192_aea95e4d_0136cfd3,
    0x000004fb_8ef0898d_93f03265_1fb4fdff, 0x000004ee_b75ec844_233103a6_021bf498,
    0x000004e1_ffb8004d_3163c860_b9071d74, 0x000004d5_67b00368_75a92237_456e309f,
    0x000004c8_eefb5103_f7099012_42e0e105, 0x000004bc_954f14c4_7aa44230_2d2de2c4,
    0x000004b0_5a612510_eca9bef6_b14af673, 0x000004a4_3de801a0_be881bd4_e192a003,
    0x00000498_3f9ad20d_34b81417_78b729ea, 0x0000048c_5f316465_9ea3c01e_a7d3f128,
    0x00000480_9c642bc6_732919ff_44e120da, 0x00000474_f6ec3ef3_4c43d94f_90dd00c3,
    0x00000469_6e8356f3_bc737ec2_30df3bc4, 0x0000045e_02e3cdb2_f87ba950_4ac70068,
    0x00000452_b3c89ca2_5026021d_e42e737e, 0x00000447_80ed5b5e_70b63209_86adfe30,
    0x0000043c_6a0e3e57_6bc96c09_9c205f64, 0x00000431_6ee8157b_7d642226_bc4a7c21,
    0x00000426_8f384ae4_8bf9781a_05a2216e, 0x0000041b_cabce188_5d40f669_4e4c6409,
    0x00000411_213473eb_7ab7e358_30e2cd6e, 0x00000406_925e32d6_c0b47c3c_58d6af26,
    0x000003fc_1df9e40f_92fa11c4_99b1ae6b, 0x000003f1_c3c7e112_b1c5c49c_decdcc44,
    0x000003e7_838915d1_aa544d9c_68b8b7c2, 0x000003dd_5cfeff72_dde9dd67_9b01213d,
    0x000003d3_4febab14_1a6db332_47b5b340, 0x000003c9_5c11b48f_bfb3912a_5abc3e42,
    0x000003bf_81344544_6c95af14_69f1bd41, 0x000003b5_bf1712df_2f0a38db_597dc972,
    0x000003ac_157e5e28_3267c751_45d45d56, 0x000003a2_842ef1d1_e7149531_8482746e,
    0x00000399_0aee214a_9ee479a9_0617994d, 0x0000038f_a981c790_9971ec52_e844d387,
    0x00000386_5fb04608_7bc684c1_bf8b915e, 0x0000037d_2d408356_2eaf896a_296193f3,
    0x00000374_11f9ea38_1f23371f_a6235f4c, 0x0000036b_0da46864_dc237360_96f8720c,
    0x00000362_20086d6b_0d929878_86147be7, 0x00000359_48eee993_bf76fb17_8c620aa4,
    0x00000350_88214cc6_fd31ad71_a11fbdf2, 0x00000347_dd698572_b834dc57_c66ef05f,
    0x0000033f_4891ff73_f5cdef16_2ef0e2da, 0x00000336_c965a302_3f9f5344_6f8b46c3,
    0x0000032e_5fafd39d_526d922e_55f7fd96, 0x00000326_0b3c6efd_06eaf61b_c7016948,
    0x0000031d_cbd7cc03_7034a292_c1c7fc6b, 0x00000315_a14eb9b1_2bbb93c6_f1104bdb,
    0x0000030d_8b6e7e1b_de5b7ed4_a6a0c1d3, 0x00000305_8a04d566_da690630_42ac8fa6,
    0x000002fd_9cdff0bd_ea8823ed_62fa12b3, 0x000002f5_c3ce7552_3d230e39_38e246d4,
    0x000002ed_fe9f7b59_6c6131a7_7daa4af8, 0x000002e6_4d228d0e_9e8528d0_0a6c9e2a,
    0x000002de_af27a5b5_ba9fd942_714a724b, 0x000002d7_247f30a0_ad8e1313_6382a848,
    0x000002cf_acfa0836_bb3d3a4b_72f7c9a2, 0x000002c8_486974fd_d83aa056_0a4c8cca,
    0x000002c0_f69f2ca6_07984748_76bb713a, 0x000002b9_b76d5116_b938d181_b0cf1786,
    0x000002b2_8aa66f7e_249b5dca_48bd58a5, 0x000002ab_701d7f62_9c4702ce_80e0df31,
    0x000002a4_67a5e1b5_d5fc8499_320a5eb6, 0x0000029d_71135fea_23dbbbaa_84673dd1,
    0x00000296_8c3a2b09_9ab0f76f_bba2877b, 0x0000028f_b8eedacf_21a56d4f_299a1179,
    0x00000288_f7066cc1_6794823a_a13bac37, 0x00000282_4656434f_ba4e6ed9_40589a25,
    0x0000027b_a6b424f0_bc1765e4_d5b385d4, 0x00000275_17f63b42_f3b9015d_37339652,
    0x0000026e_99f3122f_33824dc2_2ea7774b, 0x00000268_2c81970c_d39952a8_d235e3fc,
    0x00000261_cf7917c7_bc0775c8_b5819293, 0x0000025b_82b14208_3af08915_e34cdbf1,
    0x00000255_4602225c_a36abdb3_7357ac8a, 0x0000024f_19442364_b174148d_402e1b1a,
    0x00000248_fc500cfe_af883a43_1c257b7e, 0x00000242_eeff0376_5a6006d2_3feae865,
    0x0000023c_f12a86b5_7f6a1a1f_d06b0b3f, 0x00000237_02ac7176_5292453e_82ad8619,
    0x00000231_235ef877_77f39d0e_c435781e, 0x0000022b_531ca9b1_be1735b9_8bcfccee,
    0x00000225_91c06b8f_85679f8f_2c2cb55c, 0x0000021f_df257c25_d1874d12_3e6f9a6d,
    0x0000021a_3b27706f_013e0f78_02bf520a, 0x00000214_a5a23387_29b7d2b8_5fff2811,
    0x0000020f_1e7205ea_11d4b474_e6de16c2, 0x00000209_a5737cb2_ca507994_c86d3b1c,
    0x00000204_3a8380dc_df8d4580_62faef92, 0x000001fe_dd7f4e87_21d34b76_aafd54a3,
    0x000001f9_8e447438_00dcfe96_07ca2c1d, 0x000001f4_4cb0d223_778d07ed_ef81fb46,
    0x000001ef_18a29972_84b10353_4a2935cb, 0x000001e9_f1f84b8c_2db9b3cc_050a7135,
    0x000001e4_d890b960_08570742_d52c57a3, 0x000001df_cc4b02b2_47ebdedf_764d35a4,
    0x000001da_cd069569_4bd325e6_343f29d4, 0x000001d5_daa32cdc_ab754c6f_abd74441,
    0x000001d0_f500d125_bd32bdab_d073da0f, 0x000001cc_1bffd671_952d62c5_b957267d,
    0x000001c7_4f80dc54_7900b3ec_d0fe12e7, 0x000001c2_8f64cd1e_c57d408f_f6e0fbc2,
    0x000001bd_db8cdd33_4381f684_2cb498c7, 0x000001b9_33da8a5e_e912c5ae_aab058c1,
    0x000001b4_982f9b32_03d18ae5_ce574101, 0x000001b0_086e1e5a_ca037121_54df8e19,
    0x000001ab_84786a01_4f5233cc_ba17ebc2, 0x000001a7_0c311b24_da7de02a_5f6865b0,
    0x000001a2_9f7b14fa_9938de3f_39800e43, 0x0000019e_3e39804d_af6d2bc1_0ffb96ac,
    0x00000199_e84fcae0_9f2ecd08_aec807de, 0x00000195_9da1a6d0_06a48921_8f89e73b,
    0x00000191_5e1309f6_b1350ec5_3896a95f, 0x0000018d_29882d52_f94ba06d_8a277f13,
    0x00000188_ffe58c6d_780c5dba_18ce177a, 0x00000184_e10fe4c1_00553035_21b593b5,
    0x00000180_ccec3523_e26d4920_2a175627, 0x0000017c_c35fbd32_75c9fd62_7c25affc,
    0x00000178_c44ffcba_e654a407_e98da307, 0x00000174_cfa2b32a_42a1eaff_f4054ada,
    0x00000170_e53ddefa_c88fdd08_19005acd, 0x0000016d_0507bd23_6dc492ea_d4dd9502,
    0x00000169_2ee6c888_a18c418b_4e62f4ef, 0x00000165_62c1b96e_459a059e_bc4de2eb,
    0x00000161_a07f84ea_db337583_afae3db5, 0x0000015d_e8075c5b_e253a167_a6bf53a2,
    0x0000015a_3940acdb_6856c1e7_c17828bf, 0x00000156_94131eb6_c3c4659d_34144c96,
    0x00000152_f86694e6_7ad2769c_29d2b973, 0x0000014f_66232c87_523ff1df_2d090722,
    0x0000014b_dd313c54_822aa3f4_c7df3084, 0x00000148_5d795423_0e87b013_cd86dad2,
    0x00000144_e6e43c5e_40eb1107_6e01f2e7, 0x00000141_795af585_414ea639_aa91e780,
    0x0000013e_14c6b7a9_cb8dba8b_b7410612, 0x0000013a_b910f1ef_ff4e46b3_03bfd695,
    0x00000137_66234a0f_48157d81_b4b853fd, 0x00000134_1be79bd4_5b4975e4_e505b7eb,
    0x00000130_da47f8a4_49e60484_a6cf6ecb, 0x0000012d_a12ea700_a3af0ddb_f6d35d9c,
    0x0000012a_7086220c_a9aec95c_2451b1a0, 0x00000127_48391913_8dd296ca_06c981fa,
    0x00000124_28326f0f_bd7d2886_1d6fa265, 0x00000121_105d3a33_34e8dfe5_bd11819c,
    0x0000011e_00a4c370_d9394c35_0ead6aa5, 0x0000011a_f8f48606_d71ec972_16e3daab,
    0x00000117_f9382f0a_03f3415a_84ae04d2, 0x00000115_015b9cf2_3f3b100a_c962bcf4,
    0x00000112_114adf27_d2790537_1eab3960, 0x0000010f_28f23591_cd486c00_b706d134,
    0x0000010c_483e1025_5bb3ed9c_6e12dea7, 0x00000109_6f1b0e76_14c40676_e6f9e729,
    0x00000106_9d75ff47_3f43a246_160432bb, 0x00000103_d33be01e_0abd4993_9feb25d7,
    0x00000101_1059dcd4_bab71ac8_24c9c564, 0x000000fe_54bd4f2e_c23791a7_48b10143,
    0x000000fb_a053be6d_cda0e288_e14b3340, 0x000000f8_f30adee7_b8f46a76_dbc64e55,
    0x000000f6_4cd0919d_70936aba_e28c4268, 0x000000f3_ad92e3d2_ba95f55c_2e34fb0d,
    0x000000f1_15400ea6_e6d4989e_dc9d35e3, 0x000000ee_83c676ae_63c4f9cc_352eb316,
    0x000000eb_f914ab8d_364d2b6f_f0311018, 0x000000e9_75196792_52b520d3_637eed43,
    0x000000e6_f7c38f53_d4e12fdd_d1560c7e, 0x000000e4_8102314c_16041baa_635ac0e6,
    0x000000e2_10c48577_9dfaa521_f6974daa, 0x000000df_a6f9ecf3_ee861bc2_14a45b1f,
    0x000000dd_4391f19f_269edf7c_8ec95a0a, 0x000000da_e67c45b8_7c1b354d_637450c5,
    0x000000d8_8fa8c381_89ea3ad0_13c88774, 0x000000d6_3f076ce0_712629cb_7a4799e2,
    0x000000d3_f4886b02_cb447b64_a60f8e2a, 0x000000d1_b01c0e01_6badd377_4661ae06,
    0x000000cf_71b2cc84_ef0aef7d_d3f60058, 0x000000cd_393d436b_16972185_da275413,
    0x000000cb_06ac356c_edcc26ee_77b6c7b8, 0x000000c8_d9f08ac5_b8be6c29_498ea321,
    0x000000c6_b2fb50da_a9840a71_4ab476a9, 0x000000c4_91bdb9e3_5b040270_9a0f6f0b,
    0x000000c2_76291c93_0f8e6726_4cc1fa6f, 0x000000c0_602ef3c2_b1a15711_33fe78c6,
    0x000000be_4fc0de1b_9541c6bc_765643c5, 0x000000bc_44d09dc2_f8523f4f_b2e7098d,
    0x000000ba_3f501806_4054cdbe_b25e7a1c, 0x000000b8_3f315507_f40873ac_fdfc664b,
    0x000000b6_44667f6d_6f557a18_94857923, 0x000000b4_4ee1e40d_4fff0f6c_db121750,
    0x000000b2_5e95f19e_99939ec4_4401522c, 0x000000b0_73753868_8f184ce4_5eefbcfc,
    0x000000ae_8d7269f3_40ef00ed_74e96080, 0x000000ac_ac8058b8_cd7952d4_cd5b5526,
    0x000000aa_d091f7d7_52fda897_817c133a, 0x000000a8_f99a5ac3_9156b4ab_99a87f14,
    0x000000a7_278cb4fc_39f86c96_450502f2, 0x000000a5_5a5c59bd_ecd86dc0_77d12081,
    0x000000a3_91fcbbb7_e0caa0af_3e60bffc, 0x000000a1_ce616cc1_35e5bfb2_ad8c8ae9,
    0x000000a0_0f7e1d8e_f08635f5_9777b057, 0x0000009e_55469d6a_9b8896a1_0c84da80,
    0x0000009c_9faed9e9_9057b189_29edbd6f, 0x0000009a_eeaadea4_e36d0b9c_b54ff7dc,
    0x00000099_422ed4f1_f3e53d1e_684d40c8, 0x00000097_9a2f039b_9ccc6e8d_70c0365b,
    0x00000095_f69fce9c_06c9df1a_56bbdb7f, 0x00000094_5775b6d7_18d40c9d_f55f84c7,
    0x00000092_bca559d5_8699bd49_3864d5ff, 0x00000091_26237180_7b4eceb5_8e3d939b,
    0x0000008f_93e4d3dd_df8e4ca7_1bd1b18d, 0x0000008e_05de72cd_3905ebba_57db001b,
    0x0000008c_7c055bc5_22a19966_5b1bd1d3, 0x0000008a_f64eb791_5bf0633b_7121f2fa,
    0x00000089_74afca11_6e7e8319_ca1803a1, 0x00000087_f71df1f7_e7e2e54e_0ecc9edd,
    0x00000086_7d8ea88a_27410018_705f3eb2, 0x00000085_07f78160_bd025225_ff1b2e95,
    0x00000083_964e2a28_5b8d56fa_f8837c00, 0x00000082_28886a63_57c2353e_a26f4441,
    0x00000080_be9c232b_b807db4d_75c8628d, 0x0000007f_587f4ef5_d0b6aa74_0af81e21,
    0x0000007d_f6280153_6cb038c3_9ec2d3d7, 0x0000007c_978c66b7_80f61497_494519ce,
    0x0000007b_3ca2c43a_6a13d3a6_41863bfd, 0x00000079_e561775e_b23311ea_dcd3dbc7,
    0x00000078_91bef5d6_5eb25abe_6eaa4d72, 0x00000077_41b1cd48_c41a4856_c7c8c19f,
    0x00000075_f530a318_df4e7359_cb653b6a, 0x00000074_ac32342c_32da1585_592a8170,
    0x00000073_66ad54b2_273a877c_896b0269, 0x00000072_2498efeb_ed0c02ad_cd31dc0e,
    0x00000070_e5ec07f4_dfff4cfe_c2dae0ad, 0x0000006f_aa9db58b_69812c81_45b8b55b,
    0x0000006e_72a527da_61feb5f0_2f0aec60, 0x0000006d_3df9a442_efb3b918_22040d22,
    0x0000006c_0c928626_e1f2baa8_44b81e07, 0x0000006a_de673eb3_87d81336_9c4f4855,
    0x00000069_b36f54ad_015bef92_8295bad9, 0x00000068_8ba2643a_09b90ed3_ebd272ba,
    0x00000067_66f81eb0_3a2036f6_829aa6dd, 0x00000066_45684a60_c3b27142_801ff0b7,
    0x00000065_26eac265_9fbe3451_155cba59, 0x00000064_0b77766f_353db225_a6cdb6c3,
    0x00000062_f3066a92_72968da6_7290ef76, 0x00000061_dd8fb717_5a9d43bc_d87be3e1,
    0x00000060_cb0b8848_03e09995_bcf2df9b, 0x0000005f_bb721e40_094362e3_b13c7920,
    0x0000005e_aebbccbc_6aecf0ac_f53d6cc4, 0x0000005d_a4e0faeb_de9a731d_44daf172,
    0x0000005c_9dda233f_8e5d8f0c_ebf450ed, 0x0000005b_999fd33c_44d65a79_fb9ffeac,
    0x0000005a_982aab4c_05f8e213_d634949c, 0x00000059_99735e90_1370453a_b932f0d2,
    0x00000058_9d72b2b3_5bb35d7a_87741ae5, 0x00000057_a4217fbd_52e0ca97_e5a396e8,
    0x00000056_ad78afe5_347a1cc6_c13574c4, 0x00000055_b9713f65_ad17b397_906ef7ad,
    0x00000054_c8043c50_eb30c19a_f221927b, 0x00000053_d92ac665_1614baaf_b66add5f,
    0x00000052_ecde0ee1_2a35456b_a7e21dc6, 0x00000052_0317585a_39e19719_7e86646c,
    0x00000051_1bcff691_1195ed64_0bb10747, 0x00000050_37014e48_3f03a0fd_b041bb5e,
    0x0000004f_54a4d51a_79f81169_4bf6ce83, 0x0000004e_74b41151_6e4a6b84_c610a699,
    0x0000004d_972899bc_e5fa0a9a_c380271c, 0x0000004c_bbfc158a_52a8ee96_bd612bde,
    0x0000004b_e3283c1c_b59f7982_12c30c2d, 0x0000004b_0ca6d4e4_e5885ab7_7a182f2e,
    0x0000004a_3871b73a_31153f41_f06b4715, 0x00000049_6682ca33_5dbe8caa_760e1136,
    0x00000048_96d40480_01d21612_114cf0b5, 0x00000047_c95f6c42_390662e1_2758167c,
    0x00000046_fe1f16e8_b2c9c297_b1b334b2, 0x00000046_350d2909_19860a68_92ee635d,
    0x00000045_6e23d63a_d213774a_b035c087, 0x00000044_a95d60f2_1296ca11_d6aadd8a,
    0x00000043_e6b41a5b_50084af5_23fe2bfb, 0x00000043_26226237_01a2f6ad_f22bed86,
    0x00000042_67a2a6b5_b97ca916_67b5edf4, 0x00000041_ab2f6454_9189a7e7_01a97f42,
    0x00000040_f0c325b9_ec4f7beb_e511894b, 0x00000040_38588392_888c8fca_ac628724,
    0x0000003f_81ea246e_e71b913c_ddaf5cb0, 0x0000003e_cd72bca1_025b147f_5b393827,
    0x0000003e_1aed0e1a_566379a9_04e342bf, 0x0000003d_6a53e84a_395690a7_7277a847,
    0x0000003c_bba227fc_8315f2cd_314b4597, 0x0000003c_0ed2b738_83ae802e_410ecb1f,
    0x0000003b_63e08d20_47c8e382_a187e220, 0x0000003a_bac6add0_2a7070f0_8c35539d,
    0x0000003a_13802a3e_b38322fd_58ea8ecd, 0x00000039_6e08201c_c21ee4f9_eb5746c8,
    0x00000038_ca59b9b6_0261c392_ba17035e, 0x00000038_28702dd1_add402c0_d7f3f583,
    0x00000037_8846bf93_95d47c35_affb5291, 0x00000036_e9d8be5d_77610a83_202cafd7,
    0x00000036_4d2185b0_979623ba_09279a91, 0x00000035_b21c7d0f_a8422206_f862af32,
    0x00000035_18c517e0_f3ea11fb_f43ecb14, 0x00000034_8116d550_d09f34bc_4cb9e689,
    0x00000033_eb0d4034_5905b828_48ab19cb, 0x00000033_56a3eeec_6aee7877_2f60aa63,
    0x00000032_c3d68348_eae6ed6b_1b5700a9, 0x00000032_32a0aa6c_4c23b177_bfca034c,
    0x00000031_a2fe1caf_5c2b5ad8_5c781420, 0x00000031_14ea9d85_51a8a5ad_fe95a963,
    0x00000030_8861fb60_1dcc32da_5a615863, 0x0000002f_fd600f94_ffa76169_6df13191,
    0x0000002f_73e0be41_58eb0801_24e26fda, 0x0000002e_ebdff62f_c37610fe_c0022e8f,
    0x0000002e_6559b0bd_672136aa_2f96edd3, 0x0000002d_e049f1bf_8f36553c_2fc4137e,
    0x0000002d_5cacc769_7f02fe61_1b0e159d, 0x0000002c_da7e4a32_84f72d6c_5731f097,
    0x0000002c_59ba9cbc_4bc22c9b_3d9d9d63, 0x0000002b_da5debb9_68e0ea96_a5a81399,
    0x0000002b_5c646dd4_28122bdb_f77257dd, 0x0000002a_dfca6395_93262dde_18e9dc89,
    0x0000002a_648c174c_b5a07987_c20dcbe3, 0x00000029_eaa5dcf6_1ba3c857_f348150b,
    0x00000029_72141223_8ba1029a_82e7f9f0, 0x00000028_fad31de3_fa437e46_11c2019a,
    0x00000028_84df70ab_b815c4d2_407fb7f1, 0x00000028_1035843c_d85b42e8_becac78f,
    0x00000027_9cd1db8f_d09c5f2d_c47fa2ff, 0x00000027_2ab102bc_50638d84_ae7b450a,
    0x00000026_b9cf8ee2_50ab0a2f_c93673dc, 0x00000026_4a2a1e13_5a7bfbfa_b9d99bfd,
    0x00000025_dbbd573c_0440ce49_5b41c6e7, 0x00000025_6e85ea0d_a54da36d_29ecb033,
    0x00000025_02808ee8_3f22cd0d_5c329ae9, 0x00000024_97aa06c4_9bee43bd_59ca8e9c,
    0x00000024_2dff1b1e_a1d22016_3e7a04ea, 0x00000023_c57c9ddf_da771ece_3a2ad4b0,
    0x00000023_5e1f694a_2e733e5f_b89ddad2, 0x00000022_f7e45fe2_d40d87de_02c7ec5a,
    0x00000022_92c86c5d_70e91599_3be6b2a5, 0x00000022_2ec88187_6e226933_e6ed7cb1,
    0x00000021_cbe19a33_7e6b1fcc_329b1135, 0x00000021_6a10b925_55b10dde_ca0fab3c,
    0x00000021_0952e8fd_91dec593_75fda012, 0x00000020_a9a53c25_d4448139_12b0b070,
    0x00000020_4b04ccbd_0b3960d9_d688cd8a, 0x0000001f_ed6ebc83_eb85dd06_2acd9b4d,
    0x0000001f_90e034c9_9929423e_f7e74319, 0x0000001f_35566658_7f0cf7cb_c25c1d66,
    0x0000001e_dace8963_55394248_ce1b35f5, 0x0000001e_8145dd72_55201dd9_2aa7c2df,
    0x0000001e_28b9a950_9b93b5ab_8022b661, 0x0000001d_d1273af9_b7fee66a_20e176b3,
    0x0000001d_7a8be787_68771f42_ada0edfb, 0x0000001d_24e50b1f_823fd972_e658aa2c,
    0x0000001c_d03008e2_0658c0ba_6ca8871f, 0x0000001c_7c6a4ad7_61b087b7_9ed109a3,
    0x0000001c_299141de_d8974213_9dadb00d, 0x0000001b_d7a2659d_1d0bfb7a_52707120,
    0x0000001b_869b346b_0f821db2_29b9b07b, 0x0000001b_36793344_a9bc11bf_7b9633f9,
    0x0000001a_e739edb8_13595fdc_781d090a, 0x0000001a_98daf5d4_dfb76833_26c273a5,
    0x0000001a_4b59e41b_74c4a2b6_c5a34298, 0x00000019_feb4576c_9a672737_cb7c1e63,
    0x00000019_b2e7f4f9_32180fdd_22eee6e7, 0x00000019_67f26832_16561791_0b35939e,
    0x00000019_1dd162b8_2192a3ab_7f5a03f6, 0x00000018_d4829c4c_5c3d343a_324a6ed3,
    0x00000018_8c03d2c0_519200ba_27611344, 0x00000018_4452c9e6_8ad14feb_c2d95e58,
    0x00000017_fd6d4b83_3085e0a2_e5d11d3c, 0x00000017_b751273c_d1817f14_4a72b8a2,
    0x00000017_71fc328d_4f37a62a_de5ac787, 0x00000017_2d6c48b2_ef1ecee6_45ded17c,
    0x00000016_e99f4aa1_90c1d0a9_f8453ce4, 0x00000016_a6931ef4_082b74bd_740f3bd6,
    0x00000016_6445b1dd_9c571d0c_cf1b8360, 0x00000016_22b4f51b_a9521a80_47b71824,
    0x00000015_e1dedfe7_65ba0a04_5be76caf, 0x00000015_a1c16ee7_cb45489d_28c77611,
    0x00000015_625aa423_a20346a2_4561e103, 0x00000015_23a886f3_ae033886_c6ee04a4,
    0x00000014_e5a923f4_ff10585e_6eea049d, 0x00000014_a85a8cfb_62339ea7_f8b56251,
    0x00000014_6bbad903_f4ab8ac7_d9d92e7c, 0x00000014_2fc82427_d80b4411_4f3c511e,
    0x00000013_f4808f8f_07330b3f_fea08fa1, 0x00000013_b9e24163_4bd4a1dd_7edb838d,
    0x00000013_7feb64c3_5436f93e_75a52f1b, 0x00000013_469a29b5_e8ed258d_565665ce,
    0x00000013_0decc51d_42353abf_d3cecbd7, 0x00000012_d5e170aa_7cb4615a_6eb6d976,
    0x00000012_9e766ad1_2d46178d_d1b59de5, 0x00000012_67a9f6bb_13953886_83cf22f3,
    0x00000012_317a5c3b_eb3607bb_765c6b57, 0x00000011_fbe5e7c5_5af920a5_abe64d72,
    0x00000011_c6eaea5b_022fcc95_373c6cb3, 0x00000011_9287b986_a39ae050_a9a951f8,
    0x00000011_5ebaaf4c_6dbde1d6_3b0ec1aa, 0x00000011_2b822a1f_6050d3f4_099d4e62,
    0x00000010_f8dc8cd5_ce8ba181_3f1200be, 0x00000010_c6c83e9d_fe06bccf_30fbe3cd,
    0x00000010_9543aaf2_e1ed2172_2653759a, 0x00000010_644d4190_f23c7ec7_c0428170,
    0x00000010_33e3766b_1ed0e8a7_83c5e6a4, 0x00000010_0404c19f_ddfa0173_171362a7,
    0x0000000f_d4af9f6e_56582549_d57db7da, 0x0000000f_a5e2902b_a3c0b178_c7ec7ac4,
    0x0000000f_779c1838_36e9155f_33c43f42, 0x0000000f_49dabff5_4f98eaeb_271e59ea,
    0x0000000f_1c9d13ba_9123e48b_042e1243, 0x0000000e_efe1a3cb_b0ececfb_5f658e02,
    0x0000000e_c3a7044e_3eb462b5_d90ec761, 0x0000000e_97ebcd3f_8673e4f8_3c5879b1,
    0x0000000e_6cae9a6a_8b8ab365_6011e37c, 0x0000000e_41ee0b5e_1cfe2b25_494ffb04,
    0x0000000e_17a8c363_0292752a_22e6009a, 0x0000000d_eddd6972_428000dd_f7001856,
    0x0000000d_c48aa82b_7f8aecfb_ef6f631f, 0x0000000d_9baf2dcb_6f4205b9_66a1000c,
    0x0000000d_7349ac22_682b83a9_74459b24, 0x0000000d_4b58d88b_07a639f3_0708927b,
    0x0000000d_23db6be0_ef466488_2e3e7495, 0x0000000c_fcd02277_9975c80f_1549bbb1,
    0x0000000c_d635bc11_451f551c_7cfbb489, 0x0000000c_b00afbd5_f82eff3e_5017f2b9,
    0x0000000c_8a4ea84a_98aef625_5e518cda, 0x0000000c_64ff8b48_1c4bec01_67e48c8d,
    0x0000000c_401c71f2_ce0a8fdc_82f5f372, 0x0000000c_1ba42cb1_a9f8dd74_8f29b749,
    0x0000000b_f7958f25_cea65dbc_ebc3bef9, 0x0000000b_d3ef7022_042eebd9_fdfb84d3,
    0x0000000b_b0b0a9a2_58a40a0d_4923f123, 0x0000000b_8dd818c3_d1a148ad_e6981301,
    0x0000000b_6b649dbc_32d8b6f0_0a28253f, 0x0000000b_49551bd1_d964c9e8_e7ad6e26,
    0x0000000b_27a87953_abad99ec_b29efe26, 0x0000000b_065d9f91_1dafc91c_80adb5ae,
    0x0000000a_e5737ad2_4973d7bb_80d1bfe2, 0x0000000a_c4e8fa50_1b851bb0_21a05bb7,
    0x0000000a_a4bd102c_93380070_51a02684, 0x0000000a_84eeb16b_168fa381_dcab58e3,
    0x0000000a_657cd5e8_d9934fb2_e8ec543c, 0x0000000a_46667855_58e4c63c_97f2fd56,
    0x0000000a_27aa962a_e768b124_acc6ff97, 0x0000000a_09482fa7_4ed3056c_a3646b25,
    0x00000009_eb3e47c4_82e985ee_b2245743, 0x00000009_cd8be431_674f0135_8855719f,
    0x00000009_b0300d4a_a7aa4d24_119cd2f3, 0x00000009_9329ce13_a1fc6ae8_db483904,
    0x00000009_7678342f_62f9a47e_b3fd0446, 0x00000009_5a1a4fd9_b439dae3_806815bb,
    0x00000009_3e0f33e0_3c14a138_c6dbc6c5, 0x00000009_2255f59b_aefe2530_db164f61,
    0x00000009_06edace9_123a4881_928e4402, 0x00000008_ebd57423_0fbbb193_b5521c1a,
    0x00000008_d10c681b_5b04fb4e_a960f760, 0x00000008_b691a814_26e28cb3_ccf14607,
    0x00000008_9c6455b9_abd400fe_42daa8af, 0x00000008_8283951b_befc682c_43bf1af9,
    0x00000008_68ee8ca7_79710637_fc0b840a, 0x00000008_4fa46520_efbe94d9_3ce883da,
    0x00000008_36a4499c_f97d6870_6c2e0b10, 0x00000008_1ded677b_08cd34b7_c9dcd546,
    0x00000008_057eee5f_1191890b_ea1449b8, 0x00000007_ed58102b_80487688_bf907fb0,
    0x00000007_d57800fb_40552bdf_58298f02, 0x00000007_bdddf71b_d198abab_0b65674f,
    0x00000007_a6892b07_6d331a2c_e0e33ea6, 0x00000007_8f78d75f_394876b2_ec538dbd,
    0x00000007_78ac38e5_8ba3eb90_cf138d8e, 0x00000007_62228e78_3b153570_01cf82d2,
    0x00000007_4bdb190a_ff63f7e3_7d66d400, 0x00000007_35d51ba1_dfb52994_518a1b8e,
    0x00000007_200fdb4b_af3f160d_2e43f07e, 0x00000007_0a8a9f1c_9828c623_5626d893,
    0x00000006_f544b028_b471f23d_50d013fb, 0x00000006_e03d597e_b4c0f344_7db2dafb,
    0x00000006_cb73e822_94f477e7_c7e296a4, 0x00000006_b6e7ab08_5e5713fc_a4567a63,
    0x00000006_a297f30e_f7530f41_a1bd6b74, 0x00000006_8e8412fb_0085278c_8da039c7,
    0x00000006_7aab5f71_bf0d4886_f5d222ed, 0x00000006_670d2ef4_13fc8887_fbff6924,
    0x00000006_53a8d9d9_80c006db_6de15b10, 0x00000006_407dba4b_386893dd_3f03805d,
    0x00000006_2d8b2c3f_3daf56bf_364b0f7a, 0x00000006_1ad08d73_8d97ef96_3c402637,
    0x00000006_084d3d69_5690de6e_8f8ee9b9, 0x00000005_f6009d60_3bf341a3_90f0e177,
    0x00000005_e3ea1051_a5c34692_29c7a31e, 0x00000005_d208faec_1c92eff5_59c83aed,
    0x00000005_c05cc38e_b1691cd4_8651ab27, 0x00000005_aee4d244_718f01e4_051b7b3a,
    0x00000005_9da090bf_e6268d93_5516c88a, 0x00000005_8c8f6a56_9f6c74c2_d27be405,
    0x00000005_7bb0cbfc_cb88eb3d_b27f9893, 0x00000005_6b042440_d8d24f9d_fa192280,
    0x00000005_5a88e347_23655630_3148067e, 0x00000005_4a3e7ac5_adf681c5_06b6a028,
    0x00000005_3a245dff_e5c0fc21_29628484, 0x00000005_2a3a01c2_717721e8_87c18022,
    0x00000005_1a7edc5f_0b19577b_1bfb63e5, 0x00000005_0af265a8_6497fd3f_a74bc1b4,
    0x00000004_fb9416ee_17259a4d_6d302625, 0x00000004_ec636af8_9d1e944a_51274a53,
    0x00000004_dd5fde05_566c0aa7_dcaafcb6, 0x00000004_ce88edc2_9747aa30_d1b28203,
    0x00000004_bfde194b_c1468c13_312daa71, 0x00000004_b15ee125_66917141_2b139347,
    0x00000004_a30ac739_7730e827_6b2a9075, 0x00000004_94e14ed3_78542751_c4c1fdd4,
    0x00000004_86e1fc9c_c579a3a9_8030ce66, 0x00000004_790c5698_db60a483_9ce36c9f,
    0x00000004_6b5fe421_acab52ba_55cc14dc, 0x00000004_5ddc2de4_0018fa8d_35b573a3,
    0x00000004_5080bddb_d84071ff_24bebf38, 0x00000004_434d1f50_e4b2cee3_2588a893,
    0x00000004_3640ded2_fc6ed0c0_0a9bf561, 0x00000004_295b8a36_a18d9b2a_548c3084,
    0x00000004_1c9cb091_8e11952a_b673326f, 0x00000004_1003e237_49c079c0_7dbb1ccd,
    0x00000004_0390b0b5_c8f1dc8a_56da47d8, 0x00000003_f742aed2_143b9c1e_abba38b7,
    0x00000003_eb197084_f8e5f1a0_29124da6, 0x00000003_df148af7_c21102a3_db1daa2d,
    0x00000003_d3339480_fa760f8d_caddca39, 0x00000003_c77624a1_36ae8d20_14b58219,
    0x00000003_bbdbd3ff_e7ebac18_16c5c0e2, 0x00000003_b0643c68_3709055e_8e5959e8,
    0x00000003_a50ef8c5_e7e55483_432e6dd5, 0x00000003_99dba522_44ec5cfc_2ef8ed2b,
    0x00000003_8ec9dea1_12bd48eb_de9ab43b, 0x00000003_83d9437d_8bd9020c_0ee936d4,
    0x00000003_79097307_644436c1_3435d71b, 0x00000003_6e5a0d9f_d508ee52_a4184835,
    0x00000003_63cab4b6_af83bfca_6c449a35, 0x00000003_595b0ac7_7868ef18_6dbe35d9,
    0x00000003_4f0ab356_8a6de3bf_05e9606f, 0x00000003_44d952ee_40839b8d_51720cf5,
    0x00000003_3ac68f1c_278eeabc_d0891019, 0x00000003_30d20e6e_378b892e_cf9fc574,
    0x00000003_26fb7870_14071a82_58cfae99, 0x00000003_1d4275a8_53e18c4e_7bfed7d7,
    0x00000003_13a6af95_d04052f7_5052a37f, 0x00000003_0a27d0ac_faa23a57_10a45baf,
    0x00000003_00c58455_3a01abd0_fcb78761, 0x00000002_f77f76e6_4ef3775a_167d0cfd,
    0x00000002_ee5555a5_beb05895_4097e127, 0x00000002_e546cec4_44f79c4d_8ad0307b,
    0x00000002_dc53915b_4cb97563_71ab0bf6, 0x00000002_d37b4d6a_6f77baa9_55ce9b80,
    0x00000002_cabdb3d4_fb4bf131_4a662f46, 0x00000002_c21a765f_7f81b033_61ea167f,
    0x00000002_b99147ad_5fb494f8_a76f1882, 0x00000002_b121db3e_6d61261c_c73c2e6c,
    0x00000002_a8cbe56c_87d82dff_d98a1d89, 0x00000002_a08f1b69_42843c6b_9a163757,
    0x00000002_986b333b_9171273c_6117f1a7, 0x00000002_905fe3bd_7c05894f_371cfb4e,
    0x00000002_886ce499_d5de660c_24ad0832, 0x00000002_8091ee49_fdbd3e9f_2e2c1724,
    0x00000002_78ceba13_a2790c54_0882ade9, 0x00000002_71230206_8de2b991_3e5a699a,
    0x00000002_698e80fa_758dd89f_f96fb32e, 0x00000002_6210f28c_d16e7cc6_af49fd09,
    0x00000002_5aaa131e_b83d3f3f_4acd1b75, 0x00000002_53599fd2_c1929e3d_d13d14e5,
    0x00000002_4c1f568a_edab0893_acb47542, 0x00000002_44faf5e6_92c50c7e_7175ee00,
    0x00000002_3dec3d40_500b43df_d7399555, 0x00000002_36f2ecac_05fbbb78_72765108,
    0x00000002_300ec4f4_d43eb5c8_311a9706, 0x00000002_293f879b_1cdeccef_6e28c4b7,
    0x00000002_2284f6d2_8cd49952_4acbec68, 0x00000002_1bded580_29d824d6_92e2b53a,
    0x00000002_154ce738_656a945b_7671742f, 0x00000002_0ecef03d_350a9282_7f4a4a4b,
    0x00000002_0864b57c_2f86280b_0f8046b6, 0x00000002_020dfc8c_af5ccede_0d896614,
    0x00000001_fbca8bad_fa24ad76_d88f0699, 0x00000001_f59a29c5_6ce60899_db3fe585,
    0x00000001_ef7c9e5c_ad601940_bd15e490, 0x00000001_e971b19f_e02a9450_efac1fc0,
    0x00000001_e3792c5b_e3a75113_cc64acaf, 0x00000001_dd92d7fc_8fb79a80_49d678dd,
    0x00000001_d7be7e8a_fa28d636_229badee, 0x00000001_d1fbeaab_bfcc4a91_b9257a88,
    0x00000001_cc4ae79d_522deb7f_b5f053cf, 0x00000001_c6ab4136_49de33af_ed4ad0fa,
    0x00000001_c11cc3e3_bd432d79_250c7b5b, 0x00000001_bb9f3ca7_9be4ec2b_750b3401,
    0x00000001_b6327917_0e29d3b5_d187e4e5, 0x00000001_b0d64758_d9772965_6ea4020e,
    0x00000001_ab8a7623_c8aa8523_af7447a0, 0x00000001_a64ed4bd_18e0d6f1_d1753dc7,
    0x00000001_a12332f6_ea7fd079_13d07144, 0x00000001_9c07612e_b6769e5b_4d9f4e80,
    0x00000001_96fb304b_c7aaf883_5291eab4, 0x00000001_91fe71bd_b887ac06_bc4d33f1,
    0x00000001_8d10f77a_f4a1dc3c_41804e74, 0x00000001_883293ff_3e6a537b_41fcb51e,
    0x00000001_83631a4a_38e0568b_27bfa19f, 0x00000001_7ea25ddd_f53b881c_3d6652dc,
    0x00000001_79f032bd_848283b8_2f668ccc, 0x00000001_754c6d6b_8d03f16f_21e361ca,
    0x00000001_70b6e2e8_e3a7ed1f_a33e04ab, 0x00000001_6c2f68b3_290fb594_549eff29,
    0x00000001_67b5d4c3_6a79b0d2_6d95a430, 0x00000001_6349fd8c_c65febd8_cd67f9ab,
    0x00000001_5eebb9fb_14c754b8_a182ceb2, 0x00000001_5a9ae171_9336065f_4950a4c4,
    0x00000001_56574bc9_9447159d_902b1d0e, 0x00000001_5220d151_32d266f3_18a0a565,
    0x00000001_4df74aca_089f2c66_6a5a5c2a, 0x00000001_49da9167_e897c23a_fdf20ab8,
    0x00000001_45ca7ecf_9c75b8a7_5f576f4d, 0x00000001_41c6ed15_a5dcefc6_8e4edf31,
    0x00000001_3dcfb6bd_02dcc1e1_a261d058, 0x00000001_39e4b6b5_f5ce4ed9_e08e8267,
    0x00000001_3605c85c_d08711f0_605d53ea, 0x00000001_3232c778_c2d70167_8dfce5fe,
    0x00000001_2e6b903a_ac498d84_c0de8fa1, 0x00000001_2aafff3b_f120ea4d_3a412f93,
    0x00000001_26fff17d_528324fa_a46b4c57, 0x00000001_235b4465_c9d09b90_104e6abf,
    0x00000001_1fc1d5c1_671b8231_e93bd6e2, 0x00000001_1c3383c0_32b836e9_d98f64bb,
    0x00000001_18b02cf5_11de3953_9b22b7e8, 0x00000001_1537b054_ae51b051_9d6c3bfa,
    0x00000001_11c9ed34_610d7c58_badfc518, 0x00000001_0e66c349_1fe5e921_580c1b7a,
    0x00000001_0b0e12a6_6e1c259a_a8ab3282, 0x00000001_07bfbbbd_4fdabcda_e8216c5a,
    0x00000001_047b9f5b_40935e75_8187f75a, 0x00000001_01419ea9_2c36581e_dc3bb4e1,
    0x00000000_fe119b2a_6b3c35d5_310358b0, 0x00000000_faeb76bb_c17a10e6_dc4dee60,
    0x00000000_f7cf1392_5fb92921_7e05059d, 0x00000000_f4bc543a_e80a763a_48486dda,
    0x00000000_f1b31b98_74cef217_8c9a04f2, 0x00000000_eeb34ce3_a26d6f0e_4a1e1717,
    0x00000000_ebbccba9_9baedf64_9e5b52e7, 0x00000000_e8cf7bcb_28ba057b_ea34f481,
    0x00000000_e5eb417b_c0a795eb_a3ba2736, 0x00000000_e3100140_9da7e690_8f070e5b,
    0x00000000_e03d9fef_d3b35723_d83119d6, 0x00000000_dd7402af_69beb152_a897e920,
    0x00000000_dab30ef4_756ccf89_b4aa43a9, 0x00000000_d7faaa82_3936eab9_451f02e0,
    0x00000000_d54abb69_4505003d_c7e061fd, 0x00000000_d2a32806_992fd1d7_60bb8ff7,
    0x00000000_d003d702_cbe61230_9ec912c7, 0x00000000_cd6caf51_30ee60e1_c72480e2,
    0x00000000_cadd982f_03bfc923_6cd24f58, 0x00000000_c8567922_93ea8680_acc08627,
    0x00000000_c5d739fa_73cae2cf_b6fcc8a2, 0x00000000_c35fc2cc_a9801086_ae1c95b1,
    0x00000000_c0effbf5_e220f42b_ad3e64f7, 0x00000000_be87ce18_a728df21_4d0c658e,
    0x00000000_bc27221c_96164d6d_a11552e4, 0x00000000_b9cde12d_9a35c750_b837de14,
    0x00000000_b77bf4bb_28931691_83976818, 0x00000000_b5314677_7e0b0e54_fdb79b81,
    0x00000000_b2edc056_df78331b_d4503231, 0x00000000_b0b14c8e_dbf49f27_07d29d4c,
    0x00000000_ae7bd595_912b8e04_3f68f0be, 0x00000000_ac4d4620_f1b5085f_4aa3369d,
    0x00000000_aa258926_0d76376f_c59ca9a6, 0x00000000_a80489d8_5c00f570_62f0d815,
    0x00000000_a5ea33a9_08ed3e81_51835c62, 0x00000000_a3d67246_42273328_db55867c,
    0x00000000_a1c9319a_882c6b55_062f08a7, 0x00000000_9fc25dcc_0033664e_fdcf190e,
    0x00000000_9dc1e33b_c837f17d_b01bff63, 0x00000000_9bc7ae85_4ce76d20_941679e8,
    0x00000000_99d3ac7d_a167e356_614a20ce, 0x00000000_97e5ca32_d8f4f2cd_d379372c,
    0x00000000_95fdf4eb_624d9b68_c11faa8a, 0x00000000_941c1a25_64ee07e4_163f6344,
    0x00000000_92402796_20107c41_fa3451ce, 0x00000000_906a0b29_4b709d3e_d0eacd37,
    0x00000000_8e99b300_79cc5186_2ef73902, 0x00000000_8ccf0d72_7d1d89aa_85528747,
    0x00000000_8b0a090a_cc884811_84dcf836, 0x00000000_894a9488_ebf84e18_4a9a8d33,
    0x00000000_87909edf_d569dfa5_92a18b7b, 0x00000000_85dc1735_63d91a35_bf0e4d18,
    0x00000000_842cece1_bfd36824_b7898ce5, 0x00000000_82830f6e_cda6a494_c9f7787e,
    0x00000000_80de6e97_9d298fd0_0a169391, 0x00000000_7f3efa47_db193f63_77efcd97,
    0x00000000_7da4a29b_44074078_b729b918, 0x00000000_7c0f57dd_18d42e1c_9e301e0c,
    0x00000000_7a7f0a87_94b2882e_9db4b7d8, 0x00000000_78f3ab43_64ada2a7_38c99a87,
    0x00000000_776d2ae7_20b08fba_bc9ca171, 0x00000000_75eb7a76_c608f219_5d01189a,
    0x00000000_746e8b23_3361af2f_103ee19a, 0x00000000_72f64e49_a63183cc_3844c885,
    0x00000000_7182b573_3999880c_980aa5a0, 0x00000000_7013b254_66afb9a4_7fc86117,
    0x00000000_6ea936cc_8631adf4_bf4037b6, 0x00000000_6d4334e5_539b9765_07c33dae,
    0x00000000_6be19ed2_719fd38a_3455e8f4, 0x00000000_6a8466f0_effb418a_a96fb1ef,
    0x00000000_692b7fc6_d2a2aa06_e2b76212, 0x00000000_67d6dc02_9a458b87_8ecbd59e,
    0x00000000_66866e7a_ce22a815_8211cc87, 0x00000000_653a2a2d_872aba2a_8b939e24,
    0x00000000_63f2023f_fc6dc09d_0baeb175, 0x00000000_62ade9fe_10cf5a83_4c83bff5,
    0x00000000_616dd4d9_e1feb54f_4052328e, 0x00000000_6031b66b_58ae988f_aa063f64,
    0x00000000_5ef9826f_ba0a23d9_07c196d5, 0x00000000_5dc52cc9_3a62dc57_150008a2,
    0x00000000_5c94a97e_9114b06f_98aa1863, 0x00000000_5b67ecba_8d9ca0b0_a8f25a0a,
    0x00000000_5a3eeacb_addec5ff_d0c9ddd2, 0x00000000_59199823_b59875a4_c61dffa6,
    0x00000000_57f7e957_46fb4c59_d989780f, 0x00000000_56d9d31d_7c6df206_2bd03b93,
    0x00000000_55bf4a4f_836f702a_3710ebe9, 0x00000000_54a843e8_3899fd56_8c4a717e,
    0x00000000_5394b503_c4c2283e_fc707965, 0x00000000_528492df_3b2f5521_f123566f,
    0x00000000_5177d2d8_38ea884c_ae1aeec6, 0x00000000_506e6a6c_85208081_c2e42c19,
    0x00000000_4f684f39_b2942bef_4db8665e, 0x00000000_4e6576fc_c21e8a37_048b4eb2,
    0x00000000_4d65d791_c63915ca_7914f9c3, 0x00000000_4c6966f3_878fd68a_e754e06d,
    0x00000000_4b701b3b_2a984735_431e0802, 0x00000000_4a79ea9f_d62a3ea9_578eded8,
    0x00000000_4986cb76_5b18158d_d1614adf, 0x00000000_4896b430_dcc34833_28d01b5e,
    0x00000000_47a99b5e_7aaadbe4_bf0d2660, 0x00000000_46bf77aa_faf0d612_532dc80a,
    0x00000000_45d83fde_75d41ae4_5fe25b4d, 0x00000000_44f3eadd_021c0fe4_2ab2b9df,
    0x00000000_44126fa6_62736664_7ae2d877, 0x00000000_4333c555_b3af784a_3d37d8ff,
    0x00000000_4257e321_1c01a8b4_f5dc9e7f, 0x00000000_417ec059_7b1040d5_f57f959d,
    0x00000000_40a8546a_1af44802_fcf2adb7, 0x00000000_3fd496d8_6219dcbd_7d3a0f03,
    0x00000000_3f037f43_86009b03_1acd5908, 0x00000000_3e350564_3ed9a2c6_b33a1ade,
    0x00000000_3d69210c_7c00d7eb_055615da, 0x00000000_3c9fca27_194efb81_6e6829b0,
    0x00000000_3bd8f8b7_95424468_1a65e7bb, 0x00000000_3b14a4d9_c7fb23ab_b283cb23,
    0x00000000_3a52c6c1_9b0ae749_2b6d7cc5, 0x00000000_399356ba_c211f414_fabe1b39,
    0x00000000_38d64d28_742b55a5_d897f2e7, 0x00000000_381ba285_2623692a_6d07db43,
    0x00000000_37634f62_45776e0b_075a7987, 0x00000000_36ad4c67_f41bcd22_e5811879,
    0x00000000_35f99254_c506ed37_c891ac69, 0x00000000_354819fd_797e7122_be74b994,
    0x00000000_3498dc4c_bf24c1da_4cc14f1d, 0x00000000_33ebd242_eec4cc3c_aa13620f,
    0x00000000_3340f4f5_cbd9e018_95f79e8f, 0x00000000_32983d90_44d1a384_c7a9dc03,
    0x00000000_31f1a552_34061318_fcd698fa, 0x00000000_314d2590_216d8d10_8e7ffeee,
    0x00000000_30aab7b3_04feeac5_3dee4bcc, 0x00000000_300a5538_09c7b149_c8bbcabf,
    0x00000000_2f6bf7b0_51b26736_e3cf655d, 0x00000000_2ecf98c0_b9fb22fa_a3609671,
    0x00000000_2e353221_a0506a2a_3387c78b, 0x00000000_2d9cbd9e_a89e7f78_3ab47d84,
    0x00000000_2d063516_83834207_6ea76e07, 0x00000000_2c71927a_b568c5d8_edf535a6,
    0x00000000_2bdecfcf_5e44d210_f4066921, 0x00000000_2b4de72b_01fb76ba_9c1f3b17,
    0x00000000_2abed2b6_5162f094_c1053947, 0x00000000_2a318cab_f3e71646_b9e3e6e2,
    0x00000000_29a60f58_51ca8f23_e156de65, 0x00000000_291c5519_5f041860_97f675d1,
    0x00000000_2894585e_66b6224a_ef171f66, 0x00000000_280e13a7_d73f13bc_7900cd48,
    0x00000000_27898187_0ee08691_ffd84a51, 0x00000000_27069c9e_28fbd481_39a028f6,
    0x00000000_26855f9f_cbe25024_13ab27a0, 0x00000000_2605c54e_f7378a84_ffe3079b,
    0x00000000_2587c87e_d2e409df_e76c7946, 0x00000000_250b6412_7e96daa8_25368700,
    0x00000000_249092fc_e1d46835_4c69ec60, 0x00000000_24175040_7c910ebe_9eb03f92,
    0x00000000_239f96ef_3855dc88_10e69e55, 0x00000000_2329622a_39edfc53_adbcccf8,
    0x00000000_22b4ad21_b39b474f_28784ce1, 0x00000000_22417314_b7d080cf_a1ca26f3,
    0x00000000_21cfaf51_0c6fc23d_18552c5f, 0x00000000_215f5d32_fe8ba193_d8e0ebac,
    0x00000000_20f07825_36a9a0dc_99bc3143, 0x00000000_2082fba0_8d8478eb_dbbad8a2,
    0x00000000_2016e32b_e14cd59e_cb8242f3, 0x00000000_1fac2a5b_eb671da7_493ce5b8,
    0x00000000_1f42ccd3_16a4e3ca_0cd224de, 0x00000000_1edac641_55f8a339_2aa9cfe2,
    0x00000000_1e741263_fba26c72_a1dc1613, 0x00000000_1e0ead05_90d42bbe_314645c3,
    0x00000000_1daa91fd_adcc360f_8de612b0, 0x00000000_1d47bd30_d264ccb2_52721378,
    0x00000000_1ce62a90_3f174bbb_b6868413, 0x00000000_1c85d619_ce71bacb_62cfc1b0,
    0x00000000_1c26bbd7_cefd7b28_a70e3d5c, 0x00000000_1bc8d7e0_dd95d1c4_0617642e,
    0x00000000_1b6c2657_c02d0f16_925202b5, 0x00000000_1b10a36b_40ff1a41_09a17812,
    0x00000000_1ab64b56_0a30282c_191154b8, 0x00000000_1a5d1a5e_81d66ac1_c5741ba5,
    0x00000000_1a050cd6_a66d87a5_bcef48bb, 0x00000000_19ae1f1b_ebb2a917_644a9341,
    0x00000000_19584d97_17e7fee4_dfc1caff, 0x00000000_190394bc_217e888a_37d45b1f,
    0x00000000_18aff10a_0d2504c3_24ac1fd9, 0x00000000_185d5f0a_cc3ae5f9_1393f53e,
    0x00000000_180bdb53_1ba62e11_b6bf3d45, 0x00000000_17bb6282_630b1734_f54df105,
    0x00000000_176bf142_9464722b_74c9cddd, 0x00000000_171d8448_0bfba5f9_4ae4359b,
    0x00000000_16d01851_70bf3f52_c2637642, 0x00000000_1683aa27_94f7017b_952287ff,
    0x00000000_1638369d_57546d0b_a2c89354, 0x00000000_15edba8f_845eb3f7_143e5e63,
    0x00000000_15a432e4_b8391513_1a8817ba, 0x00000000_155b9c8d_40c29c24_1ffba263,
    0x00000000_1513f483_000e464e_68118c30, 0x00000000_14cd37c9_4f328d86_cf5dd59d,
    0x00000000_1487636c_e16f605e_b57c52e8, 0x00000000_14427483_a7a98e3c_28a3c9fc,
    0x00000000_13fe682c_b43ab2be_40aef84d, 0x00000000_13bb3b90_1f14adb5_481a8c8e,
    0x00000000_1378ebde_ea37b7b6_eeedaa55, 0x00000000_13377652_e67a25f0_5fc6983a,
    0x00000000_12f6d82e_98a0f26a_bc32061c, 0x00000000_12b70ebd_1ec82082_54b8f885,
    0x00000000_12781752_161a17d5_f4351719, 0x00000000_1239ef49_80d51271_de57af77,
    0x00000000_11fc9407_ac9dbd71_c015f5be, 0x00000000_11c002f9_191e2dc5_d6e3fbcf,
    0x00000000_11843992_5ef04d32_122d43d9, 0x00000000_11493550_16d2e601_fa028b8f,
    0x00000000_110ef3b6_c1287649_c70cb16e, 0x00000000_10d57252_adbef5e4_62e06a50,
    0x00000000_109caeb7_e3dfbcaf_0d0a0cf6, 0x00000000_1064a682_0aa6b8ce_30a8acbe,
    0x00000000_102d5754_51a0270b_a021961f, 0x00000000_0ff6bed9_59ac019d_001fb4f5,
    0x00000000_0fc0dac3_1e265bd9_b855bf13, 0x00000000_0f8ba8ca_de53e39a_56d0526a,
    0x00000000_0f5726b1_0711c328_0162ee0d, 0x00000000_0f23523d_1cc820c9_670ebaf1,
    0x00000000_0ef0293d_a59e7b1b_b0365708, 0x00000000_0ebda988_13f12381_3eeb5b00,
    0x00000000_0e8bd0f8_b1071a05_b761c938, 0x00000000_0e5a9d72_88079026_d2378ae6,
    0x00000000_0e2a0cdf_512e59fb_f53b5cee, 0x00000000_0dfa1d2f_5d3e973b_8a0c63c9,
    0x00000000_0dcacc59_8132df9c_927c3ad6, 0x00000000_0d9c185b_022a400d_1f201497,
    0x00000000_0d6dff37_8191582b_1adf40c0, 0x00000000_0d407ef8_e986e95c_6458d34b,
    0x00000000_0d1395af_597b2acd_7957f989, 0x00000000_0ce74171_13093783_16c5f835,
    0x00000000_0cbb805a_6709ed8b_2dffc06d, 0x00000000_0c90508d_a2df9734_7c707094,
    0x00000000_0c65b032_fdf9b909_f8f632fc, 0x00000000_0c3b9d78_87906120_38e79dcc,
    0x00000000_0c121692_1496560e_f170c798, 0x00000000_0be919b9_2de185b7_de34ae61,
    0x00000000_0bc0a52c_fe8915be_a84dcdf8, 0x00000000_0b98b732_42787952_f5751803,
    0x00000000_0b714e13_3536f1a6_9aa73c01, 0x00000000_0b4a681f_80e2e01e_145cf8ed,
    0x00000000_0b2403ac_2d6052f8_ec7d53d5, 0x00000000_0afe1f13_8fba36da_a7a33449,
    0x00000000_0ad8b8b5_39b59943_3c1069c3, 0x00000000_0ab3cef5_e99669a8_00864759,
    0x00000000_0a8f603f_7a15287b_7bea5678, 0x00000000_0a6b6b00_d284f50b_93b19af6,
    0x00000000_0a47edad_d7296cb2_51ff3e05, 0x00000000_0a24e6bf_59bbcf65_e89070db,
    0x00000000_0a0254b3_0a1edf40_be36f5bb, 0x00000000_09e0360b_6740f222_44ea0946,
    0x00000000_09be894f_b02bae0d_1962b14a, 0x00000000_099d4d0b_d540ea66_8db99e45,
    0x00000000_097c7fd0_69a431b7_49637922, 0x00000000_095c2032_94d06104_24eb580c,
    0x00000000_093c2ccc_0458e349_e18626c6, 0x00000000_091ca43a_ddd60915_de8e93db,
    0x00000000_08fd8521_b0fbfda1_838ed671, 0x00000000_08dece27_69dbdc3d_c701aea6,
    0x00000000_08c07df7_434e6a40_1299ecf0, 0x00000000_08a29340_b987fb01_cfc1a22f,
    0x00000000_08850cb7_7cd504e0_2c20a388, 0x00000000_0867e913_647eef82_303d0a87,
    0x00000000_084b2710_61d8a500_1b7ebc32, 0x00000000_082ec56e_737270d8_2abf2679,
    0x00000000_0812c2f1_9874b8ea_82b64dcd, 0x00000000_07f71e61_c4211dff_f78bd8b8,
    0x00000000_07dbd68a_d17992a5_e0040178, 0x00000000_07c0ea3c_770cf86c_16838439,
    0x00000000_07a6584a_3ae8d4d1_c5b99c3f, 0x00000000_078c1f8b_66afb069_ab4b84fc,
    0x00000000_07723eda_fbd3b3f7_21725067, 0x00000000_0758b517_a7f5187a_8a13fcaf,
    0x00000000_073f8123_b9640055_ab5eb099, 0x00000000_0726a1e5_13c550df_381dab52,
    0x00000000_070e1645_24da24e8_2599574d, 0x00000000_06f5dd30_d96971dd_9e77aa1d,
    0x00000000_06ddf598_924b7a57_5e4a621e, 0x00000000_06c65e70_1996aa04_14bb0922,
    0x00000000_06af16ae_97ed7804_21f0cd57, 0x00000000_06981d4e_89ecedde_982cf8e8,
    0x00000000_0681714d_b5bb7254_f8e5d577, 0x00000000_066b11ad_20b7786f_a5fe1487,
    0x00000000_0654fd71_0545b42f_8224ce30, 0x00000000_063f33a0_c8be7760_c5e7cd76,
    0x00000000_0629b346_f179da17_a97303df, 0x00000000_06147b71_1cfa5369_352c6911,
    0x00000000_05ff8b2f_f63567f9_5d0f392e, 0x00000000_05eae197_2bfa14fb_8384ccce,
    0x00000000_05d67dbd_67749f43_a8110bf3, 0x00000000_05c25ebc_42cf6f04_e3fe609a,
    0x00000000_05ae83b0_3ff0a1d5_72b79721, 0x00000000_059aebb8_bf53fd89_6408e9ca,
    0x00000000_058795f7_f700ef6b_435d6f26, 0x00000000_05748192_e99c444d_7f719ffc,
    0x00000000_0561adb1_5d9546e0_39029eac, 0x00000000_054f197d_d46df2a5_5bce19bc,
    0x00000000_053cc425_821deac8_8abfc56d, 0x00000000_052aacd8_448fe509_7d5d58ef,
    0x00000000_0518d2c8_9b3939cd_f83ce395, 0x00000000_0507352b_9ecb4b54_935dd03a,
    0x00000000_04f5d338_f8fe76e3_0e544d35, 0x00000000_04e4ac2a_dc7643aa_0a0120f6,
    0x00000000_04d3bf3d_fcbe83f4_a8a43f4b, 0x00000000_04c30bb1_86611e14_d5fce347,
    0x00000000_04b290c7_17143354_d853f822, 0x00000000_04a24dc2_b6005c0c_4f221c40,
    0x00000000_049241ea_cc1eb0c9_f2d60371, 0x00000000_04826c88_1cae5954_4956af86,
    0x00000000_0472cce5_bdc15b12_1a6b0a80, 0x00000000_04636251_10e06137_c45a1c55,
    0x00000000_04542c19_bbc539e0_a9f0d167, 0x00000000_04452991_a12bc403_d5a8db6d,
    0x00000000_04365a0c_d9b90af8_9fe4f7cc, 0x00000000_0427bce1_acf84d03_adffcf26,
    0x00000000_04195168_8a6dab26_031a7d35, 0x00000000_040b16fc_02be4127_1ff65c29,
    0x00000000_03fd0cf8_c0ed6590_5a6bc3aa, 0x00000000_03ef32bd_83aed20a_ace71d7e,
    0x00000000_03e187ab_16cd7549_485a7751, 0x00000000_03d40b24_4ca6b062_34d08d5e,
    0x00000000_03c6bc8d_f7b9c22b_4bc5d08e, 0x00000000_03b99b4e_e44b23e4_d90c9421,
    0x00000000_03aca6cf_d21b9b2c_38adb966, 0x00000000_039fde7b_6e32c5df_df434adf,
    0x00000000_039341be_4cbce54b_63fd26a0, 0x00000000_0386d006_e2fbae9d_651211aa,
    0x00000000_037a88c5_8149e752_7dfcc2ed, 0x00000000_036e6b6c_4d3194e8_07aaab48,
    0x00000000_0362776f_3b9487cf_02c2390c, 0x00000000_0356ac44_0ae70a3b_6063ab6f,
    0x00000000_034b0962_3d7c7c0d_e338d140, 0x00000000_033f8e43_13e5a5b7_0e36f52d,
    0x00000000_03343a61_87608c90_0cffaa1f, 0x00000000_03290d3a_445993c3_3821662e,
    0x00000000_031e064b_a4fdb578_d25b9e27, 0x00000000_03132515_abdda095_e032b2b7,
    0x00000000_03086919_fea187f2_8d398499, 0x00000000_02fdd1db_e0cd7083_771fce60,
    0x00000000_02f35ee0_2e95cc85_726042e8, 0x00000000_02e90fad_57c4324d_f3deca80,
    0x00000000_02dee3cb_5aabfdf3_42612040, 0x00000000_02d4dac3_bf2ead8e_eef9e302,
    0x00000000_02caf421_91cfc86a_d8a3b041, 0x00000000_02c12f71_5ed821f5_31bf5f91,
    0x00000000_02b78c41_2d8849e2_a23ae21a, 0x00000000_02ae0a20_7b59fb6e_bb174f4b,
    0x00000000_02a4a8a0_37505e32_840acede, 0x00000000_029b6752_bd56eb8e_fe41d5ed,
    0x00000000_029245cb_d1aecc2e_0beb2093, 0x00000000_028943a0_9c6a819f_4758b054,
    0x00000000_02806067_a4f7b097_fa20e54f, 0x00000000_02779bb8_cdb6e0dd_98cdec4a,
    0x00000000_026ef52d_4fa10860_ee451a57, 0x00000000_02666c5f_b5fab78d_7f0ee3a5,
    0x00000000_025e00eb_da14bd4c_a3ec1347, 0x00000000_0255b26e_df1a19b6_7084bd95,
    0x00000000_024d8087_2deb16e3_b245f398, 0x00000000_02456ad4_71055fcc_30775e4e,
    0x00000000_023d70f7_9078ed92_dcea8f84, 0x00000000_02359292_ade9a416_d81224d3,
    0x00000000_022dcf49_209d7714_0f743ba1, 0x00000000_022626bf_7196f190_d5e5f5b8,
    0x00000000_021e989b_57bbf9c7_255f32a9, 0x00000000_02172483_b408ac28_4606ffe1,
    0x00000000_020fca20_8dce2888_60da172e, 0x00000000_0208891b_0efd2ced_11734fd7,
    0x00000000_0201611d_807c59e6_5d774000, 0x00000000_01fa51d3_4689fcc4_9454774b,
    0x00000000_01f35ae8_dd293c67_82cbc333, 0x00000000_01ec7c0b_d49a85cc_1e59f780,
    0x00000000_01e5b4ea_cddf15e5_58701a4f, 0x00000000_01df0535_77477eb3_2ba834f0,
    0x00000000_01d86c9c_890d05f0_310c697e, 0x00000000_01d1ead1_c1f5bc12_2442bd0b,
    0x00000000_01cb7f87_e4032abc_b6294693, 0x00000000_01c52a72_b12b7a27_e942c173,
    0x00000000_01beeb46_e81ced5b_f559321f, 0x00000000_01b8c1ba_410b9584_5b0179bc,
    0x00000000_01b2ad83_6a891cfa_67355c43, 0x00000000_01acae5a_06668b04_ee078ae9,
    0x00000000_01a6c3f6_a69fe1a7_7c7cb00e, 0x00000000_01a0ee12_ca517736_afc353ac,
    0x00000000_019b2c68_dab6edc1_c640f90d, 0x00000000_01957eb4_2833aaba_e0139559,
    0x00000000_018fe4b0_e764b19f_c3924e3a, 0x00000000_018a5e1c_2e3bc4bc_59d6983b,
    0x00000000_0184eab3_f123af76_7a2f11f1, 0x00000000_017f8a37_002d9de8_045032c5,
    0x00000000_017a3c65_044765e0_badd0c24, 0x00000000_017500fe_7c7aa5bc_cd2da3fb,
    0x00000000_016fd7c4_bb349dcf_8ab35256, 0x00000000_016ac079_e396a973_56a960e7,
    0x00000000_0165bae0_e6cf3d20_a27d36e0, 0x00000000_0160c6bd_817b4f3d_7b1ae3a5,
    0x00000000_015be3d4_391011a6_139f35e3, 0x00000000_015711ea_594ce23c_b15f36fb,
    0x00000000_015250c5_f1b5591c_743e8b7a, 0x00000000_014da02d_d3135b56_ad6cd950,
    0x00000000_0148ffe9_8d01196d_d04939aa, 0x00000000_01446fc1_6b7ae10b_87c6a01d,
    0x00000000_013fef7e_7478a9b9_20a334d0, 0x00000000_013b7eea_658f44aa_4876a0f3,
    0x00000000_01371dcf_b19917f2_1d619461, 0x00000000_0132cbf9_7e664dc1_b4565c99,
    0x00000000_012e8933_a2746095_96d40088, 0x00000000_012a554a_a2aced7d_46c985f2,
    0x00000000_0126300b_b02bb5ec_9a6e34d3, 0x00000000_01221944_a60bbaca_bc682ee3,
    0x00000000_011e10c4_073b5ab5_d0d0d514, 0x00000000_011a1658_fc575db4_afb49504,
    0x00000000_011629d3_518cd8d1_d3ba4a3c, 0x00000000_01124b03_7481d45b_89d000c5,
    0x00000000_010e79ba_72449fc5_9f2c704e, 0x00000000_010ab5c9_f541be68_3fbd171c,
    0x00000000_0106ff04_43405896_7249e7df, 0x00000000_0103553c_3b651cc4_a33ce01c,
    0x00000000_00ffb845_543b7cb4_fd1be380, 0x00000000_00fc27f3_99c532db_e85eb3ae,
    0x00000000_00f8a41b_ab8ffc6a_f55d2b92, 0x00000000_00f52c92_bad174ab_ac9107a3,
    0x00000000_00f1c12e_8888fe8e_4d4323f9, 0x00000000_00ee61c5_63a7a98a_62e19a84,
    0x00000000_00eb0e2e_273dff28_4f90bb0c, 0x00000000_00e7c640_38afa6c3_78ed759d,
    0x00000000_00e489d3_85eccd4c_ac4862d3, 0x00000000_00e158c0_83b13f0b_93b3f01f,
    0x00000000_00de32e0_2bc92194_b6e82a56, 0x00000000_00db180b_fb5b3c5f_840809e9,
    0x00000000_00d8081d_f138be9d_3e86f4df, 0x00000000_00d502f0_8c327126_778c79ca,
    0x00000000_00d2085e_c9734388_dcfe5b7d, 0x00000000_00cf1844_22e02372_bc8763e2,
    0x00000000_00cc327c_8d7d0dec_9038ea84, 0x00000000_00c956e4_77d74a03_4c75ad94,
    0x00000000_00c68558_c874bcb7_f45a0f8d, 0x00000000_00c3bdb6_dc48463a_3476f4ce,
    0x00000000_00c0ffdc_852b18a4_6d13c90e, 0x00000000_00be4ba8_085af89f_aee798ef,
    0x00000000_00bba0f8_1cfd5885_b8ea2d7b, 0x00000000_00b8ffab_eaa73ec6_0519d91b,
    0x00000000_00b667a3_07e9e881_6669f327, 0x00000000_00b3d8bd_78e4197d_a50d584f,
    0x00000000_00b152db_add80abf_e97fea35, 0x00000000_00aed5de_81c5e949_a396010c,
    0x00000000_00ac61a7_390ad69f_f2f0ee84, 0x00000000_00a9f617_80045cf1_6affd1da,
    0x00000000_00a79311_69b848d9_5fa3bc6a, 0x00000000_00a53877_6e80daea_ba1926cb,
    0x00000000_00a2e62c_6abd4356_a95e99fe, 0x00000000_00a09c13_9d865a2d_575ce4af,
    0x00000000_009e5a10_a76786e0_25fffce5, 0x00000000_009c2007_891bc9d5_d69cae66,
    0x00000000_0099eddc_a24edb09_63ce7b39, 0x00000000_0097c374_b06250d4_43c6dfd1,
    0x00000000_0095a0b4_cd36c22c_402c0098, 0x00000000_00938582_6df8d7c4_12756af2,
    0x00000000_009171c3_61f23fa4_8183240b, 0x00000000_008f655d_d15e76f9_d8433232,
    0x00000000_008d6038_3c435df7_36e5ff1b, 0x00000000_008b6239_794d89d6_79a8ad20,
    0x00000000_00896b48_b4b04920_3ae0840c, 0x00000000_00877b4d_6f094e8b_d2f338a5,
    0x00000000_0085922f_7c47f6eb_2980d654, 0x00000000_0083afd7_02981eb9_b06de14a,
    0x00000000_0081d42c_79507c08_fcebe3f5, 0x00000000_007fff18_a7e471a8_2545ade0,
    0x00000000_007e3084_a4d95085_55416c6b, 0x00000000_007c6859_d4befc6a_ef8887ad,
    0x00000000_007aa681_e92be95b_11dba0da, 0x00000000_0078eae6_dfbc66ed_6d0cce26,
    0x00000000_00773573_01152f34_19eca784, 0x00000000_00758610_dfe92ecc_6aa62ec9,
    0x00000000_0073dcab_58027be0_ad8d3f1f, 0x00000000_0072392d_8d4e71ff_6c3b10a8,
    0x00000000_00709b82_eaece8cb_e9118636, 0x00000000_006f0397_22427baa_76f27100,
    0x00000000_006d7156_2a0dd8a9_c432c072, 0x00000000_006be4ac_3d800d08_539ec6e3,
    0x00000000_006a5d85_db57c5d3_25cd7d8b, 0x00000000_0068dbcf_c4ff7b38_030b4537,
    0x00000000_00675f76_fdae7d42_ebd46b25, 0x00000000_0065e868_c98cd8da_f42d4a71,
    0x00000000_00647692_acda0bef_361efc92, 0x00000000_006309e2_6b167fe0_9a372b65,
    0x00000000_0061a246_062fc150_f317fa22, 0x00000000_00603fab_bdaf6c9b_53dfa6d5,
    0x00000000_005ee202_0decc654_a169515b, 0x00000000_005d8937_af40f74e_25116d27,
    0x00000000_005c353b_953de3ae_5dae52d0, 0x00000000_005ae5fc_ede794ce_71bb1fbf,
    0x00000000_00599b6b_20f02da4_7d30f137, 0x00000000_00585575_cef6619c_7f1e5dfd,
    0x00000000_0057140c_d0c665da_e79a294c, 0x00000000_0055d720_369d54fc_b7154e40,
    0x00000000_00549ea0_476efd81_c5300845, 0x00000000_00536a7d_802e1326_1fe944b9,
    0x00000000_00523aa8_9316bb87_85216ac1, 0x00000000_00510f12_66fb6e8b_c0cfb2cc,
    0x00000000_004fe7ac_16942314_3ac91310, 0x00000000_004ec466_efcfc0a2_38636e86,
    0x00000000_004da534_7327cea6_49674390, 0x00000000_004c8a06_52f65a4c_05734e9c,
    0x00000000_004b72ce_72ce0ba9_a7fbef54, 0x00000000_004a5f7e_e6d46351_3e34d8d1,
    0x00000000_00495009_f31e1956_fc3db2d0, 0x00000000_00484462_0b0d96f5_ee9ea4a9,
    0x00000000_00473c79_d0b38411_9b42ef85, 0x00000000_00463844_143161e8_426e422f,
    0x00000000_004537b3_d31e2c5e_4d63aaff, 0x00000000_00443abc_37ecfb60_16573e13,
    0x00000000_00434150_99559deb_9487dbb4, 0x00000000_00424b64_79bf2867_98bd19e3,
    0x00000000_004158eb_86ac7002_2a943eeb, 0x00000000_004069d9_982a6ce3_3eba886b,
    0x00000000_003f7e22_b0407d14_6a1cb967, 0x00000000_003e95ba_fa628211_66e43057,
    0x00000000_003db096_cae4d308_367eb576, 0x00000000_003cceaa_9e71fde2_6893fc08,
    0x00000000_003befeb_19825143_925cbfba, 0x00000000_003b144d_07d529bb_4cf3de72,
    0x00000000_003a3bc5_5bebfc7b_2498537a, 0x00000000_00396649_2e8719f2_bf14369a,
    0x00000000_003893cd_be2422c6_253badd9, 0x00000000_0037c448_6e7e29a3_8b58218b,
    0x00000000_0036f7ae_c80f7c8f_2ef732c7, 0x00000000_00362df6_7795104c_e69768ca,
    0x00000000_00356715_4d93889f_d1a9f5e5, 0x00000000_0034a301_3dddd829_35f34eac,
    0x00000000_0033e1b0_5f1d72c0_0313d5a9, 0x00000000_00332318_ea5c0d2a_ae851e97,
    0x00000000_00326731_3a8ee535_223423c9, 0x00000000_0031adef_cc238d2c_4ea86ad3,
    0x00000000_0030f74b_3c8e35d8_97ed114f, 0x00000000_0030433a_49d9721f_cac2fdf0,
    0x00000000_002f91b3_d2376f86_8e914e62, 0x00000000_002ee2ae_d3949ed8_609f4a54,
    0x00000000_002e3622_6b2bc84c_0eeccd7b, 0x00000000_002d8c05_d51b8689_6504d5b4,
    0x00000000_002ce450_6bfd2403_4bf1bbc6, 0x00000000_002c3ef9_a87cd628_00921bcd,
    0x00000000_002b9bf9_20f351f7_39759981, 0x00000000_002afb46_8900b59c_1fa502b2,
    0x00000000_002a5cd9_b128c2b6_dccbe353, 0x00000000_0029c0aa_8670650f_35a3004c,
    0x00000000_002926b1_11fc8177_31ba8559, 0x00000000_00288ee5_78b208b2_3255b48a,
    0x00000000_0027f93f_fad74a42_116ce00f, 0x00000000_002765b8_f3b68308_f0984f2d,
    0x00000000_0026d448_d941a3bb_4618e975, 0x00000000_002644e8_3bb74b2a_74e245ea,
    0x00000000_0025b78f_c548f07c_d3ebd17d, 0x00000000_00252c38_39c23974_79999e22,
    0x00000000_0024a2da_763178f2_6a35331a, 0x00000000_00241b6f_709151ef_eca639de,
    0x00000000_002395f0_37737b33_c753a811, 0x00000000_00231255_f1aca015_00c04bee,
    0x00000000_00229099_de015aa8_74805fb2, 0x00000000_002210b5_52d443c2_1dfeba00,
    0x00000000_002192a1_bdd5153e_679bd059, 0x00000000_00211658_a3b0db13_166a4e36,
    0x00000000_00209bd3_9fc32fb2_919689b6, 0x00000000_0020230c_63c88057_48c874b5,
    0x00000000_001fabfc_b79155d7_def275b2, 0x00000000_001f369e_78b69eaf_7f69518c,
    0x00000000_001ec2eb_9a4ef6f0_62374e70, 0x00000000_001e50de_24a4eae1_02c32497,
    0x00000000_001de070_34ee310e_e97d3219, 0x00000000_001d719b_fd03d8ac_26b4a4a5,
    0x00000000_001d045b_c31b6916_ba5bb1b4, 0x00000000_001c98a9_e180ef73_22bd35c8,
    0x00000000_001c2e80_c651f74d_2b55c966, 0x00000000_001bc5da_f3396b3b_d5840e94,
    0x00000000_001b5eb2_fd2c5a8e_d6f423ef, 0x00000000_001af903_8c27a115_ade43550,
    0x00000000_001a94c7_5aee6e19_b1fe6d53, 0x00000000_001a31f9_36c9a7ad_d1e0700e,
    0x00000000_0019d093_ff48277f_d9da58f7, 0x00000000_00197092_a5ffce60_304e4774,
    0x00000000_001911f0_2e4f6bbd_e7bc2985, 0x00000000_0018b4a7_ad21765d_de41019d,
    0x00000000_001858b4_48af939c_5e79ba18, 0x00000000_0017fe11_3846ea91_56a31cb4,
    0x00000000_0017a4b9_c40d4077_c0cd2a23, 0x00000000_00174ca9_44c6dbc1_425957a9,
    0x00000000_0016f5db_239d2b47_5a11b99c, 0x00000000_0016a04a_d9e62f13_ab428172,
    0x00000000_00164bf3_f0eca041_11ae32a0, 0x00000000_0015f8d2_01b8d57f_2e456271,
    0x00000000_0015a6e0_b4da61ca_0789af2b, 0x00000000_0015561b_c2326aef_2abcebbe,
    0x00000000_0015067e_f0beb581_74bc78e6, 0x00000000_0014b806_166563e4_4af7c0cc,
    0x00000000_00146aad_17c1661e_96994175, 0x00000000_00141e6f_e7ef982d_46042830,
    0x00000000_0013d34a_885c8c94_737d023b, 0x00000000_00138939_089300f5_93796f71,
    0x00000000_00134037_860afa78_39ef3cb6, 0x00000000_0012f842_2bf987da_1c543038,
    0x00000000_0012b155_33212701_f619b039, 0x00000000_00126b6c_e1a2cbf7_df8e0b14,
    0x00000000_00122685_8acf872c_7b7381a1, 0x00000000_0011e29b_8efac8ff_1e8d83ee,
    0x00000000_00119fab_5b4d4079_be204791, 0x00000000_00115db1_69985340_0726b238,
    0x00000000_00111caa_402a2cb5_801676a5, 0x00000000_0010dc92_71a26265_02a96d4d,
    0x00000000_00109d66_9cc72bba_328c2119, 0x00000000_00105f23_6c5b2b23_d942001c,
    0x00000000_001021c5_96f3c6bc_3f44acbc, 0x00000000_000fe549_ded00e9a_b699e66d,
    0x00000000_000fa9ad_11b02ef7_940e0fca, 0x00000000_000f6eec_08ad6c51_ca2b6fe2,
    0x00000000_000f3503_a812a7cb_3c22350d, 0x00000000_000efbf0_df3569f6_af5c9220,
    0x00000000_000ec3b0_a84f7258_00a5fb5a, 0x00000000_000e8c40_0858c9dc_edd4d4d0,
    0x00000000_000e559c_0ee2569a_5f02704e, 0x00000000_000e1fc1_d5f0ef1f_a2c4feda,
    0x00000000_000deaae_81d8ebb6_87c87143, 0x00000000_000db65f_411a33ec_a3c3e18e,
    0x00000000_000d82d1_4c3cc6c7_6c5619fe, 0x00000000_000d5001_e5adbc0a_0a019ee7,
    0x00000000_000d1dee_599cbcf9_008321f4, 0x00000000_000cec93_fdd9f30c_ea47ba3f,
    0x00000000_000cbbf0_31b46b0a_970d4dae, 0x00000000_000c8c00_5dd8eafb_dfe957a5,
    0x00000000_000c5cc1_f4313989_754224c5, 0x00000000_000c2e32_6fc3d53a_cde59c61,
    0x00000000_000c004f_54941a26_31871ebb, 0x00000000_000bd316_2f82d49f_9cbba204,
    0x00000000_000ba684_962f3f79_f137492f, 0x00000000_000b7a98_26d86c72_8ac8da12,
    0x00000000_000b4f4e_883f1563_e883dd57, 0x00000000_000b24a5_6987d4e0_a1e7688c,
    0x00000000_000afa9a_821dc4dc_59c2a809, 0x00000000_000ad12b_9195820c_cc4dbac1,
    0x00000000_000aa856_5f9092b1_73915826, 0x00000000_000a8018_bba12f74_8cf58675,
    0x00000000_000a5870_7d2e6d1c_8cd25acf, 0x00000000_000a315b_8358c5c9_414fcfeb,
    0x00000000_000a0ad7_b4df007c_0ced306b, 0x00000000_0009e4e3_000375ae_bad6dd6d,
    0x00000000_0009bf7b_5a71afc0_7beb62cf, 0x00000000_00099a9e_c1246604_9b1f57d6,
    0x00000000_0009764b_384bd142_6afa89d4, 0x00000000_0009527e_cb345879_d457f3d6,
    0x00000000_00092f37_8c2d94c3_c88c30fb, 0x00000000_00090c73_9471ab29_a6c20eb1,
    0x00000000_0008ea31_040cfb52_65e0dd90, 0x00000000_0008c86e_01c621e8_09d1dc31,
    0x00000000_0008a728_bb064d9b_949ee690, 0x00000000_0008865f_63c1e5b1_41d15667,
    0x00000000_00086610_36618102_6cd12514, 0x00000000_00084639_73ab2c66_09ede95d,
    0x00000000_000826d9_62abff74_1558d04d, 0x00000000_000807ee_50a1fe9b_cbcb5b48,
    0x00000000_0007e976_90e64987_e6053f49, 0x00000000_0007cb70_7cd794cf_6ad69142,
    0x00000000_0007adda_73c4edf4_fb346a72, 0x00000000_000790b2_dad8c8b9_c0fee62a,
    0x00000000_000773f8_1d0454cc_63c8edd1, 0x00000000_000757a8_aaeb1adf_973d775d,
    0x00000000_00073bc2_facee036_fccb0389, 0x00000000_00072045_887bcfbc_2e2d465d,
    0x00000000_0007052e_d534e7b0_d85d90d8, 0x00000000_0006ea7d_67a0ab15_d684082c,
    0x00000000_0006d02f_cbb615e2_3ad4d1bf, 0x00000000_0006b644_92a9d328_27f39a2c,
    0x00000000_00069cba_52dbb448_48a36214, 0x00000000_0006838f_a7c46857_954e0cf6,
    0x00000000_00066ac3_31e372dd_ef6c3882, 0x00000000_00065253_96ad6116_ea2778f4,
    0x00000000_00063a3f_807a3ce0_ddd3f3ed, 0x00000000_00062285_9e743c89_212ed9fa,
    0x00000000_00060b24_a486aea6_f7c97d4d, 0x00000000_0005f41b_4b4d2139_70c8717a,
    0x00000000_0005dd68_5002c33f_143ea01a, 0x00000000_0005c70a_74720000_d808a180,
    0x00000000_0005b100_7ee4534c_673faca4, 0x00000000_00059b49_3a1255dc_513f82ee,
    0x00000000_000585e3_7514012f_36e9f746, 0x00000000_000570ce_03512a11_8666e04d,
    0x00000000_00055c07_bc72311f_c731e97d, 0x00000000_0005478f_7c50e889_e1f1fe43,
    0x00000000_00053364_22e9ae62_3170d804, 0x00000000_00051f84_944cbac5_842d236d,
    0x00000000_00050bef_b88fa12b_888706cb, 0x00000000_0004f8a4_7bbf0431_688593ee,
    0x00000000_0004e5a1_cdd07b32_9dc39511, 0x00000000_0004d2e6_a294a906_424a9d18,
    0x00000000_0004c071_f1a98339_581b78a2, 0x00000000_0004ae42_b66cc920_aef1f028,
    0x00000000_00049c57_efeeaa1f_368dd733, 0x00000000_00048ab0_a0e49a7f_ab8aff80,
    0x00000000_0004794b_cf9c5642_a5aae2bb, 0x00000000_00046828_85ef1144_207b7fe9,
    0x00000000_00045745_d134d41d_a2948e56, 0x00000000_000446a2_c238052c_2c4c0fb8,
    0x00000000_0004363e_6d291d23_14da7e01, 0x00000000_00042617_e9928696_f4821684,
    0x00000000_0004162e_524ca7ed_ab80a2fc, 0x00000000_00040680_c5721722_8073e1b8,
    0x00000000_0003f70e_6453f6cf_357a5b6d, 0x00000000_0003e7d6_536e7bec_d1d0daac,
    0x00000000_0003d8d7_ba5d9bc0_b60b668e, 0x00000000_0003ca11_c3d1e16c_6362eb59,
    0x00000000_0003bb83_9d856a98_2af9b815, 0x00000000_0003ad2c_78310ab2_c08384c1,
    0x00000000_00039f0b_87819441_6c7c749c, 0x00000000_00039120_020d47be_551fe4c3,
    0x00000000_00038369_21496784_0aae015a, 0x00000000_000375e6_217ff047_33580bcf,
    0x00000000_00036896_41c575a0_dd70b43f, 0x00000000_00035b78_c3ef222d_a3517147,
    0x00000000_00034e8c_ec88dac7_6bd8b07e, 0x00000000_000341d2_02cb8461_2c882d8b,
    0x00000000_00033547_50936c0d_a72f9f90, 0x00000000_000328ec_2256d0bb_acc6f255,
    0x00000000_00031cbf_c71c8e33_f9b4ebd6, 0x00000000_000310c1_9072e8e6_454bbe3f,
    0x00000000_000304f0_d2667a14_9ed4b660, 0x00000000_0002f94c_e3793bed_ae26e173,
    0x00000000_0002edd5_1c99b527_e489e3c2, 0x00000000_0002e288_d91a43b1_1c9dd4ab,
    0x00000000_0002d767_76a88607_953a23cb, 0x00000000_0002cc70_5544e2d2_9bbf7752,
    0x00000000_0002c1a2_d73a2e52_9e421656, 0x00000000_0002b6fe_61156d41_bd4a962a,
    0x00000000_0002ac82_599db4bf_4fbfc4d2, 0x00000000_0002a22e_29cc26e2_21ed9bf7,
    0x00000000_00029801_3cc40b8e_8a97aa70, 0x00000000_00028dfa_ffcb052e_bea7ece4,
    0x00000000_0002841a_e24160ed_15636afa, 0x00000000_00027a60_559a8211_3429dd7b,
    0x00000000_000270ca_cd556822_59b2b732, 0x00000000_00026759_bef54f72_3d8590bc,
    0x00000000_00025e0c_a1fa6bb5_31236f48, 0x00000000_000254e2_efdabc4d_6506becb,
    0x00000000_00024bdc_23faf9f0_64560ff2, 0x00000000_000242f7_bba79d4f_06ee7eee,
    0x00000000_00023a35_360dfe69_4252b909, 0x00000000_00023194_14358c38_671f59a9,
    0x00000000_00022913_d8f91c5b_79f11d0e, 0x00000000_000220b4_09005272_7439584e,
    0x00000000_00021874_2ab91ed6_535d4709, 0x00000000_00021053_c651545c_f2b8ed5f,
    0x00000000_00020852_65b054d8_bfc2416b, 0x00000000_0002006f_9470d405_66a09e40,
    0x00000000_0001f8aa_dfdab093_a1229bec, 0x00000000_0001f103_d6dce307_5a1c97d2,
    0x00000000_0001e97a_0a07821c_5befa7d0, 0x00000000_0001e20d_0b85dc66_c24e6703,
    0x00000000_0001dabc_6f18a6e5_6555e771, 0x00000000_0001d387_ca10403d_6ec7d9fa,
    0x00000000_0001cc6e_b3470857_41aa4cae, 0x00000000_0001c570_c31bcc15_d0d3b567,
    0x00000000_0001be8d_936c44e2_7201b802, 0x00000000_0001b7c4_bf8fabc8_291071bd,
    0x00000000_0001b115_e4515fda_51c92a2c, 0x00000000_0001aa80_9feb9fa3_76941abe,
    0x00000000_0001a404_9202555a_072b64e9, 0x00000000_00019da1_5b9df599_84470b4e,
    0x00000000_00019756_9f26705f_9424729b, 0x00000000_00019124_005e340d_4fd11544,
    0x00000000_00018b09_245d422d_f249146d, 0x00000000_00018505_b18c55c4_e8d06e66,
    0x00000000_00017f19_4fa01ae6_177a0867, 0x00000000_00017943_a794775b_f59b7175,
    0x00000000_00017384_63a7e41f_f4003ea9, 0x00000000_00016ddb_2f56d76a_6a14f043,
    0x00000000_00016847_b7573f20_10002a66, 0x00000000_000162c9_a9940b63_d1c24f3a,
    0x00000000_00015d60_b528c914_8affb340, 0x00000000_0001580c_8a5d4bfe_fc191d36,
    0x00000000_000152cc_daa1688d_07b153e4, 0x00000000_00014da1_5888bcbc_03bd569a,
    0x00000000_00014889_b7c68824_a2c79782, 0x00000000_00014385_ad2992df_b12d26c6,
    0x00000000_00013e94_ee982313_96d616a0, 0x00000000_000139b7_330c00f7_404845c7,
    0x00000000_000134ec_328e8917_c1fce1a5, 0x00000000_00013033_a634ccae_b69cee00,
    0x00000000_00012b8d_481bbfd8_043f7659, 0x00000000_000126f8_d3647576_5dfc27ff,
    0x00000000_00012276_04306896_7e2644ff, 0x00000000_00011e04_979dd321_ba556356,
    0x00000000_000119a4_4bc411b1_350a64d3, 0x00000000_00011554_dfb01453_914690f1,
    0x00000000_00011116_1360dc17_aad7b138, 0x00000000_00010ce7_a7c4052f_72756414,
    0x00000000_000108c9_5eb25d7e_a71853e7, 0x00000000_000104ba_faec8769_be3a5690,
    0x00000000_000100bc_4017a8b9_e2f54c60, 0x00000000_0000fccc_f2ba256b_88446fe2,
    0x00000000_0000f8ec_d838663d_9d071ff4, 0x00000000_0000f51b_b6d1aad8_00d36525,
    0x00000000_0000f159_559ce760_672fd774, 0x00000000_0000eda5_7c85ad55_6376539a,
    0x00000000_0000e9ff_f4491f87_e271440e, 0x00000000_0000e668_8672f10b_dfc2342e,
    0x00000000_0000e2de_fd5a6ef9_ac4ff123, 0x00000000_0000df63_241f94d9_a0628fed,
    0x00000000_0000dbf4_c6a82b94_97ba228e, 0x00000000_0000d893_b19cf2c4_17d77d0e,
    0x00000000_0000d53f_b266d43d_80e2d9a9, 0x00000000_0000d1f8_972c21b4_2820122f,
    0x00000000_0000cebe_2ecddc4e_b7b912f8, 0x00000000_0000cb90_48e5060c_aada9e90,
    0x00000000_0000c86e_b5bffcd9_36b2dc18, 0x00000000_0000c559_465fdf29_68d9d782,
    0x00000000_0000c24f_cc75fa03_ba0f5b2e, 0x00000000_0000bf52_1a61404f_c90c9662,
    0x00000000_0000bc60_032bcb4d_647002aa, 0x00000000_0000b979_5a886412_7c8c0274,
    0x00000000_0000b69d_f4d015f0_0621cba1, 0x00000000_0000b3cd_a6ffc99e_45d74f94,
    0x00000000_0000b108_46b5e911_6984de1e, 0x00000000_0000ae4d_aa300bd7_c0530fe2,
    0x00000000_0000ab9d_a848abe3_4d0fdf0d, 0x00000000_0000a8f8_1874e2a0_d72771b1,
    0x00000000_0000a65c_d2c22e3f_064ea0d3, 0x00000000_0000a3cb_afd43f08_7b2f53a5,
    0x00000000_0000a144_88e2ccb4_3c4de252, 0x00000000_00009ec7_37b77390_31ef5b43,
    0x00000000_00009c53_96ab9969_ce0726fd, 0x00000000_000099e9_80a65a19_5e238058,
    0x00000000_00009788_d11a7b94_e4f7db3e, 0x00000000_00009531_6404696f_b786e5af,
    0x00000000_000092e3_15e837ac_770f841f, 0x00000000_0000909d_c3cfacc7_5cc52ac4,
    0x00000000_00008e61_4b4852df_27085c57, 0x00000000_00008c2d_8a618fe3_514bf0ed,
    0x00000000_00008a02_5faac4ae_981b15f0, 0x00000000_000087df_aa3172f5_21ceadb3,
    0x00000000_000085c5_497f69ed_fa72b88a, 0x00000000_000083b3_1d98f99f_e6299cb7,
    0x00000000_000081a9_06fb2cb9_e107434f, 0x00000000_00007fa6_e69a08df_f5ecd7c6,
    0x00000000_00007dac_9dded555_67633b41, 0x00000000_00007bba_0ea667ed_75d194e4,
    0x00000000_000079cf_1b3f782c_5dba72bc, 0x00000000_000077eb_a668f882_76e83cbe,
    0x00000000_0000760f_9350758b_aaa4d2ab, 0x00000000_0000743a_c5907b3d_c3438903,
    0x00000000_0000726d_212efff0_626bc7dc, 0x00000000_000070a6_8a9bd529_b5b8b41e,
    0x00000000_00006ee6_e6af1e1b_4a6ae1d2, 0x00000000_00006d2e_1aa7cbba_a91762e4,
    0x00000000_00006b7c_0c2a1e61_a976dc03, 0x00000000_000069d0_a13e2ce2_b4badaa7,
    0x00000000_0000682b_c04e70fd_7222a182, 0x00000000_0000668d_50265920_9dee27e1,
    0x00000000_000064f5_37f0df66_0e4936b9, 0x00000000_00006363_5f3725b6_2c5c72a5,
    0x00000000_000061d7_addf1700_6961c303, 0x00000000_00006052_0c2a0d76_7867df19,
    0x00000000_00005ed2_62b37db8_5560cd5a, 0x00000000_00005d58_9a6fa6df_612bb670,
    0x00000000_00005be4_9caa4757_18867555, 0x00000000_00005a76_53055672_29399c90,
    0x00000000_0000590d_a777c2aa_e5650b4f, 0x00000000_000057aa_844c347e_5096670e,
    0x00000000_0000564c_d41fd5d1_3d489972, 0x00000000_000054f4_81e11dcf_2b968001,
    0x00000000_000053a1_78cea132_d34df457, 0x00000000_00005253_a475e6e8_7c2dd7a8,
    0x00000000_0000510a_f0b240fa_7ef472ee, 0x00000000_00004fc7_49aba9b8_80fdd48e,
    0x00000000_00004e88_9bd5a50a_328e6396, 0x00000000_00004d4e_d3ee25de_8d872549,
    0x00000000_00004c19_defc77a8_c729a231, 0x00000000_00004ae9_aa502bdc_5bc361de,
    0x00000000_000049be_23800b59_ce96fdd6, 0x00000000_00004897_38690bbd_eb253331,
    0x00000000_00004774_d72d4885_87157539, 0x00000000_00004656_ee32fff7_f56da0aa,
    0x00000000_0000453d_6c2393ca_8c8dd61e, 0x00000000_00004428_3fea8d6f_d0827215,
    0x00000000_00004317_58b4a605_02b4ca93, 0x00000000_0000420a_a5eed1d1_06d5fdbe,
    0x00000000_00004102_17454f47_bb0fdc75, 0x00000000_00003ffd_9ca2b985_0f18f9f4,
    0x00000000_00003efd_262f1e33_52bc419b, 0x00000000_00003e00_a44f16d0_60bc3acc,
    0x00000000_00003d08_07a2e545_76b86601, 0x00000000_00003c13_410593c5_b5e1e511,
    0x00000000_00003b22_418c17e7_72ddeae7, 0x00000000_00003a34_fa8478ec_a5323729,
    0x00000000_0000394b_5d74f92e_f0041aca, 0x00000000_00003865_5c1b42a3_e6cf18ee,
    0x00000000_00003782_e86b966e_5907117d, 0x00000000_000036a3_f48fff71_975ce128,
    0x00000000_000035c8_72e787db_cc955eaf, 0x00000000_000034f0_5605719c_aa936ba0,
    0x00000000_0000341b_90b071bd_d2603c56, 0x00000000_0000334a_15e1ee92_83a2d0a0,
    0x00000000_0000327b_d8c540b4_451a9517, 0x00000000_000031b0_ccb6f6c2_5c5309dd,
    0x00000000_000030e8_e5441bda_0ee8cbd3, 0x00000000_00003024_162980bd_cb5d2aaf,
    0x00000000_00002f62_535307a1_7a9e3b7f, 0x00000000_00002ea3_90daf292_5e17b9b1,
    0x00000000_00002de7_c3093471_0056a910, 0x00000000_00002d2e_de52c473_e00823c0,
    0x00000000_00002c78_d758f429_9e64a5a8, 0x00000000_00002bc5_a2e8c7f1_9aee0b4d,
    0x00000000_00002b15_35fa51e2_06c8e77a, 0x00000000_00002a67_85b00f12_99eb4f64,
    0x00000000_000029bc_87564743_33dd48f8, 0x00000000_00002914_30626ed5_d0db1e76,
    0x00000000_0000286e_76728b13_5ad1745a, 0x00000000_000027cb_4f4c98b2_fbe78cbc,
    0x00000000_0000272a_b0ddf49b_b61f1342, 0x00000000_0000268c_913ac6d8_20fb868d,
    0x00000000_000025f0_e69d6fb4_4b273be4, 0x00000000_00002557_a765f6fd_daaa6e80,
    0x00000000_000024c0_ca197d5e_a283284e, 0x00000000_0000242c_4561afca_00446bd6,
    0x00000000_0000239a_100c3cf5_6fd9304f, 0x00000000_0000230a_210a4cd4_de9dc684,
    0x00000000_0000227c_6f6ffa13_61b96850, 0x00000000_000021f0_f273cd81_0dfb498a,
    0x00000000_00002167_a16e3b6e_c97bc07f, 0x00000000_000020e0_73d922f1_08e441fa,
    0x00000000_0000205b_614f4f02_83893144, 0x00000000_00001fd8_618bf980_02701b82,
    0x00000000_00001f57_6c6a4ff6_86f50f17, 0x00000000_00001ed8_79e4fa3d_1e0387e9,
    0x00000000_00001e5b_8215a2d3_ccc4079d, 0x00000000_00001de0_7d348101_1b380a56,
    0x00000000_00001d67_6397e4a7_d883bcca, 0x00000000_00001cf0_2db3c3ce_cb98c4c6,
    0x00000000_00001c7a_d41949d4_1998a9f0, 0x00000000_00001c07_4f766846_41990f5f,
    0x00000000_00001b95_9895695c_a37908a9, 0x00000000_00001b25_a85c8409_9d2e7493,
    0x00000000_00001ab7_77cd71a0_5f5d7714, 0x00000000_00001a4b_00050508_af2bf28a,
    0x00000000_000019e0_3a3ac37a_e01840d1, 0x00000000_00001977_1fc07ebe_652667ec,
    0x00000000_0000190f_aa01f0e5_6cfa9898, 0x00000000_000018a9_d2845980_1073e7fa,
    0x00000000_00001845_92e61c41_af0fdfcd, 0x00000000_000017e2_e4de6113_27cfa409,
    0x00000000_00001781_c23cb58c_b082fa3f, 0x00000000_00001722_24e8afd2_2045626b,
    0x00000000_000016c4_06e192cc_949e939c, 0x00000000_00001667_623df3bc_6b1af812,
    0x00000000_0000160c_312b611e_9b53166d, 0x00000000_000015b2_6dee0ae0_8f3b11a5,
    0x00000000_0000155a_12e06bdd_a9366caf, 0x00000000_00001503_1a72f4a1_b8d0e365,
    0x00000000_000014ad_7f2bb76b_b0244880, 0x00000000_00001459_3ba6156b_fcddc487,
    0x00000000_00001406_4a926d39_f8835df5, 0x00000000_000013b4_a6b5ca7b_f40e2e3a,
    0x00000000_00001364_4ae996bd_7326de9f, 0x00000000_00001315_321b4b6f_3b51c4e6,
    0x00000000_000012c7_574c250c_eb1f00d4, 0x00000000_0000127a_b590d763_dd02169f,
    0x00000000_0000122f_481142f7_28cc6fad, 0x00000000_000011e5_0a082b7c_a5e7ab25,
    0x00000000_0000119b_f6c2ef6e_df5876e0, 0x00000000_00001154_09a140af_f94981e9,
    0x00000000_0000110d_3e14de39_9660b387, 0x00000000_000010c7_8fa14ed5_d96fe253,
    0x00000000_00001082_f9db9cdd_ae2e811c, 0x00000000_0000103f_786a12f8_9193cbd5,
    0x00000000_00000ffd_0703f9da_20219bed, 0x00000000_00000fbb_a17156f9_bdf7dd1e,
    0x00000000_00000f7b_438aac40_b9e04bbf, 0x00000000_00000f3b_e938b8ab_59aa5b59,
    0x00000000_00000efd_8e7439d9_4b2884d3, 0x00000000_00000ec0_2f45ae8a_01eb6a3e,
    0x00000000_00000e83_c7c51a01_9674dbc1, 0x00000000_00000e48_5419c852_c80d741a,
    0x00000000_00000e0d_d07a138a_ceabd8a0, 0x00000000_00000dd4_392b29bb_b675427d,
    0x00000000_00000d9b_8a80d3e2_0a4c6e42, 0x00000000_00000d63_c0dd3da2_9ea6f9d3,
    0x00000000_00000d2c_d8b0bddd_597a2bb4, 0x00000000_00000cf6_ce79a011_df7facaa,
    0x00000000_00000cc1_9ec3ee93_1a597534, 0x00000000_00000c8d_46293d86_963aa35e,
    0x00000000_00000c59_c15076ac_c0b1a644, 0x00000000_00000c27_0ceda5ef_1cffb740,
    0x00000000_00000bf5_25c1c6b1_8d127d4c, 0x00000000_00000bc4_089a91e3_d8b77d5e,
    0x00000000_00000b93_b2524cd0_a6fe276d, 0x00000000_00000b64_1fcf98a7_27f56719,
    0x00000000_00000b35_4e0542bc_b7052262, 0x00000000_00000b07_39f21583_c81380a5,
    0x00000000_00000ad9_e0a0aa35_7b71ae53, 0x00000000_00000aad_3f273b2b_3e349393,
    0x00000000_00000a81_52a776e5_e62417e8, 0x00000000_00000a56_184e53bf_c1cf8caa,
    0x00000000_00000a2b_8d53e447_1e982b1f, 0x00000000_00000a01_aefb2c3e_cfa3afbc,
    0x00000000_000009d8_7a91f642_49a976dd, 0x00000000_000009af_ed70aa0a_f06c8b2d,
    0x00000000_00000988_04fa2354_3b75447c, 0x00000000_00000960_be9b895c_603dd6ce,
    0x00000000_0000093a_17cc26ff_3886f38a, 0x00000000_00000914_0e0d4369_23ecce88,
    0x00000000_000008ee_9ee9fb5f_ac19e239, 0x00000000_000008c9_c7f71b1d_bb1c1b05,
    0x00000000_000008a5_86d2f8c1_3b6b0ae5, 0x00000000_00000881_d9254f48_011ad2ae,
    0x00000000_0000085e_bc9f1a19_e387f3f5, 0x00000000_0000083c_2efa711d_f67ca19c,
    0x00000000_0000081a_2dfa6558_d968c912, 0x00000000_000007f8_b76ade12_1ac354bd,
    0x00000000_000007d7_c920767e_b50d7199, 0x00000000_000007b7_60f85bee_b2384dc5,
    0x00000000_00000797_7cd82c7c_095b3184, 0x00000000_00000778_1aadd638_d1bb5cd2,
    0x00000000_00000759_386f76da_ed211443, 0x00000000_0000073a_d41b3be3_52561ada,
    0x00000000_0000071c_ebb7433f_2771d487, 0x00000000_000006ff_7d517c60_e246ce22,
    0x00000000_000006e2_86ff89cf_abdcc224, 0x00000000_000006c6_06dea32b_4a61bac3,
    0x00000000_000006a9_fb1377a2_db64fe98, 0x00000000_0000068e_61ca10dc_ae7f57a2,
    0x00000000_00000673_3935b64d_96c64f45, 0x00000000_00000658_7f90d0fe_0f8b7dcb,
    0x00000000_0000063e_331ccfbb_96f658ad, 0x00000000_00000624_52220bb4_a6fe4ef3,
    0x00000000_0000060a_daefad7d_bb2ccc82, 0x00000000_000005f1_cbdb927d_d75b37fc,
    0x00000000_000005d9_234232c1_09587763, 0x00000000_000005c0_df86872f_65044785,
    0x00000000_000005a8_ff11f026_fffd03d0, 0x00000000_00000591_80541c77_7776a721,
    0x00000000_0000057a_61c2f0bd_90381ae4, 0x00000000_00000563_a1da6f1d_860e9e12,
    0x00000000_0000054d_3f1c9f5a_a5466fb4, 0x00000000_00000537_3811774a_cde43c9a,
    0x00000000_00000521_8b46c3a4_85745a16, 0x00000000_0000050c_37501126_414bda2d,
    0x00000000_000004f7_3ac69615_980c4339, 0x00000000_000004e2_94491c15_0e1d6de2,
    0x00000000_000004ce_427bea4f_35a2012d, 0x00000000_000004ba_4408aff5_df2a742f,
    0x00000000_000004a6_979e6f14_1d18a629, 0x00000000_00000493_3bf167b1_e0433e0d,
    0x00000000_00000480_2fbb0347_f8f4563a, 0x00000000_0000046d_71b9c083_4bdabcc7,
    0x00000000_0000045b_00b11f56_0ef07e95, 0x00000000_00000448_db698d55_e6b4c686,
    0x00000000_00000437_00b05265_c0628b50, 0x00000000_00000425_6f577daa_4a094ede,
    0x00000000_00000414_2635d2c7_ed99895d, 0x00000000_00000403_2426b769_381377aa,
    0x00000000_000003f2_680a210c_9a151e7a, 0x00000000_000003e1_f0c48318_73039ffb,
    0x00000000_000003d1_bd3ebd34_5bfcb48f, 0x00000000_000003c1_cc6609e6_ab9f65ee,
    0x00000000_000003b2_1d2bed75_2f8f4919, 0x00000000_000003a2_ae862508_1c5b926c,
    0x00000000_00000393_7f6e960e_382bb181, 0x00000000_00000384_8ee33de1_483dda32,
    0x00000000_00000375_dbe621a9_cce12d4f, 0x00000000_00000367_657d3e81_1b2546be,
    0x00000000_00000359_2ab279d0_e6fbff57, 0x00000000_0000034b_2a9391ef_54005d0a,
    0x00000000_0000033d_64320ef6_a67f2aab, 0x00000000_0000032f_d6a333d7_b1baaed8,
    0x00000000_00000322_80ffefa6_23b3a433, 0x00000000_00000315_6264cf1d_d206188f,
    0x00000000_00000308_79f1ee60_2ea1607b, 0x00000000_000002fb_c6caeae9_0e4f03e6,
    0x00000000_000002ef_4816d5b9_ee1d9980, 0x00000000_000002e2_fd0025ba_e7da1b66,
    0x00000000_000002d6_e4b4aa50_88cc8186, 0x00000000_000002ca_fe657e25_c0eb8587,
    0x00000000_000002bf_4946fa29_23af89c2, 0x00000000_000002b3_c490a8bc_b695d799,
    0x00000000_000002a8_6f7d3917_8c43f148, 0x00000000_0000029d_494a72d8_6e0eade6,
    0x00000000_00000292_513929c8_d8726a40, 0x00000000_00000287_868d31cf_91c8eb9e,
    0x00000000_0000027c_e88d5312_253ec799, 0x00000000_00000272_76833e44_8eb5623c,
    0x00000000_00000268_2fbb8126_66dffdaa, 0x00000000_0000025e_13857b2c_e1821007,
    0x00000000_00000254_21335258_f2434040, 0x00000000_0000024a_5819e838_ef122b12,
    0x00000000_00000240_b790cf15_098a8949, 0x00000000_00000237_3ef23f45_fb45a070,
    0x00000000_0000022d_ed9b0cb5_43653084, 0x00000000_00000224_c2ea9c86_5609753c,
    0x00000000_0000021b_be42dae8_20ba6f51, 0x00000000_00000212_df08310e_491ba24d,
    0x00000000_0000020a_24a17b51_8d87e4df, 0x00000000_00000201_8e77ff76_b170eb06,
    0x00000000_000001f9_1bf7631b_6193f1d8, 0x00000000_000001f0_cc8da248_7e42890b,
    0x00000000_000001e8_9fab0629_3c23fda4, 0x00000000_000001e0_94c21be6_8df17f55,
    0x00000000_000001d8_ab47aba6_4bc4dc7f, 0x00000000_000001d0_e2b2afad_8e9fbbfc,
    0x00000000_000001c9_3a7c4ba5_b8d7ab14, 0x00000000_000001c1_b21fc403_a61245d7,
    0x00000000_000001ba_491a7590_7f744ae7, 0x00000000_000001b2_feebcd13_b296ace9,
    0x00000000_000001ab_d3153f1d_8bbdc589, 0x00000000_000001a4_c51a3ff1_f5b0ca7f,
    0x00000000_0000019d_d4803b92_e36aa5ed, 0x00000000_00000197_00ce8de9_e9b1723d,
    0x00000000_00000190_498e7b10_906f2f3c, 0x00000000_00000189_ae4b27b6_e56ceb75,
    0x00000000_00000183_2e9191a7_dbd1a9cf, 0x00000000_0000017c_c9f0886b_057fd873,
    0x00000000_00000176_7ff8a603_351f5265, 0x00000000_00000170_503c47c9_994eb8b5,
    0x00000000_0000016a_3a4f8764_e31d8945, 0x00000000_00000164_3dc833dc_0b90cf0d,
    0x00000000_0000015e_5a3dcac4_4d8eb06a, 0x00000000_00000158_8f497189_eb2191d1,
    0x00000000_00000152_dc85eed3_569213b4, 0x00000000_0000014d_418fa3fe_595ff70f,
    0x00000000_00000147_be0486b6_d4a50231, 0x00000000_00000142_51841aa6_b7ea6b75,
    0x00000000_0000013c_fbaf6b3e_ccf12eb1, 0x00000000_00000137_bc290597_f8601831,
    0x00000000_00000132_9294f26c_90b7511c, 0x00000000_0000012d_7e98b029_6e50e8fb,
    0x00000000_00000128_7fdb2d16_58984a32, 0x00000000_00000123_9604c195_75ffce88,
    0x00000000_0000011e_c0bf2a79_6593d889, 0x00000000_00000119_ffb58371_aa5e011e,
    0x00000000_00000115_5294418d_1219207e, 0x00000000_00000110_b9092dd1_c20050bb,
    0x00000000_0000010c_32c35fea_95c790c9, 0x00000000_00000107_bf7338e9_7e0c79e9,
    0x00000000_00000103_5eca5e1e_8cc89921, 0x00000000_000000ff_107bb403_5f85831f,
    0x00000000_000000fa_d43b593a_9844b40a, 0x00000000_000000f6_a9bea1a3_173acec3,
    0x00000000_000000f2_90bc117e_a8a6e844, 0x00000000_000000ee_88eb58ab_db334cab,
    0x00000000_000000ea_92054df2_b46da36d, 0x00000000_000000e6_abc3ea63_fa0097b8,
    0x00000000_000000e2_d5e244ca_c7713fe2, 0x00000000_000000df_101c8d30_29367aad,
    0x00000000_000000db_5a300870_77106a40, 0x00000000_000000d7_b3db0be2_2892296d,
    0x00000000_000000d4_1cdcf90d_dfd7df69, 0x00000000_000000d0_94f63977_67677e74,
    0x00000000_000000cd_1be83a77_613ad1ad, 0x00000000_000000c9_b1756925_65ee133e,
    0x00000000_000000c6_55612e52_54072435, 0x00000000_000000c3_076fea92_903eb853,
    0x00000000_000000bf_c766f257_f8a6673a, 0x00000000_000000bc_950c8a1b_4d74a72b,
    0x00000000_000000b9_7027e294_d32a48de, 0x00000000_000000b6_58811503_f2ac2ccc,
    0x00000000_000000b3_4de11f85_9ccfa567, 0x00000000_000000b0_5011e179_37b85b8d,
    0x00000000_000000ad_5ede17f3_dd439f8c, 0x00000000_000000aa_7a115a41_b296e54e,
    0x00000000_000000a7_a1781675_21bdc9fb, 0x00000000_000000a4_d4df8e03_bf177814,
    0x00000000_000000a2_1415d270_a52398d5, 0x00000000_0000009f_5ee9c204_120c499d,
    0x00000000_0000009c_b52b0490_1314cdde, 0x00000000_0000009a_16aa0842_0adbfccb,
    0x00000000_00000097_8337fe80_e025c07c, 0x00000000_00000094_faa6d8d7_a3a06db3,
    0x00000000_00000092_7cc945ec_7bd95245, 0x00000000_00000090_0972ae83_a74f9f46,
    0x00000000_0000008d_a077328e_654dd57c, 0x00000000_0000008b_41aba645_96e82105,
    0x00000000_00000088_ece58f4f_ea31a64a, 0x00000000_00000086_a1fb21f3_626bb05b,
    0x00000000_00000084_60c33e52_10a001de, 0x00000000_00000082_29156db1_d0c346a9,
    0x00000000_0000007f_fac9dfce_e025d7ba, 0x00000000_0000007d_d5b96839_229fb596,
    0x00000000_0000007b_b9bd7bbb_ec88d8bd, 0x00000000_00000079_a6b02dd0_2830c4ed,
    0x00000000_00000077_9c6c2e18_ae27b435, 0x00000000_00000075_9accc5e8_a848bab2,
    0x00000000_00000073_a1add5d3_d80efc7b, 0x00000000_00000071_b0ebd348_99587cd2,
    0x00000000_0000006f_c863c633_7b4f395d, 0x00000000_0000006d_e7f346ac_49c535c5,
    0x00000000_0000006c_0f787aac_61e1dc30, 0x00000000_0000006a_3ed213ce_2d8eaddf,
    0x00000000_00000068_75df4d15_a19eb485, 0x00000000_00000066_b47fe8c1_9b378107,
    0x00000000_00000064_fa942e25_f98bcea8, 0x00000000_00000063_47fce78e_517f2263,
    0x00000000_00000061_9c9b6029_194efc50, 0x00000000_0000005f_f85161fb_2ae174aa,
    0x00000000_0000005e_5b0133db_7bda6e2c, 0x00000000_0000005c_c48d9776_eb17eb80,
    0x00000000_0000005b_34d9c75c_03b394bc, 0x00000000_00000059_abc9750e_96231b2b,
    0x00000000_00000058_2940c723_088af412, 0x00000000_00000056_ad245761_3fcedd8f,
    0x00000000_00000055_375930ef_0361d1fd, 0x00000000_00000053_c7c4ce81_be4b7cd7,
    0x00000000_00000052_5e4d1897_804bf6d8, 0x00000000_00000050_fad863b7_22778c61,
    0x00000000_0000004f_9d4d6eb7_73139f3f, 0x00000000_0000004e_4593610d_4ceb5a4f,
    0x00000000_0000004c_f391c920_7ebef077, 0x00000000_0000004b_a7309aa7_67da8692,
    0x00000000_0000004a_60582d09_2f4ab81d, 0x00000000_00000049_1ef139c6_7b8be5e4,
    0x00000000_00000047_e2e4dae8_90f732e6, 0x00000000_00000046_ac1c8976_bd9443d4,
    0x00000000_00000045_7a821bf1_f9598690, 0x00000000_00000044_4dffc4d6_a245fe9f,
    0x00000000_00000043_26801124_3c1f572d, 0x00000000_00000042_03ede6eb_1bfd5032,
    0x00000000_00000040_e63483df_e828886a, 0x00000000_0000003f_cd3f7bf4_d52e2dd8,
    0x00000000_0000003e_b8fab7f8_89644827, 0x00000000_0000003d_a952743a_9073204d,
    0x00000000_0000003c_9e333f35_48cfc48e, 0x00000000_0000003b_9789f83d_3569d44f,
    0x00000000_0000003a_9543ce35_9e23a108, 0x00000000_00000039_974e3e4a_69ff4e09,
    0x00000000_00000038_9d9712af_1e3df40f, 0x00000000_00000037_a80c6162_edfeed5b,
    0x00000000_00000036_b69c8af9_c63d56a1, 0x00000000_00000035_c936396a_4258869f,
    0x00000000_00000034_dfc85ee0_75a1c4a2, 0x00000000_00000033_fa423495_76b5e37d,
    0x00000000_00000033_189339ab_99b49d9a, 0x00000000_00000032_3aab320f_46b1a553,
    0x00000000_00000031_607a255c_5a0455e4, 0x00000000_00000030_89f05dc7_fc62d225,
    0x00000000_0000002f_b6fe670e_e0fc2a28, 0x00000000_0000002e_e7950d67_d80adc9a,
    0x00000000_0000002e_1ba55c7a_a49db7d4, 0x00000000_0000002d_53209e5b_0498c540,
    0x00000000_0000002c_8df85a87_da328bc5, 0x00000000_0000002b_cc1e54ee_6673974a,
    0x00000000_0000002b_0d848cf1_847ed7a4, 0x00000000_0000002a_521d3c74_d5a91498,
    0x00000000_00000029_99dad6eb_cea46a1c, 0x00000000_00000028_e4b0086c_964283cf,
    0x00000000_00000028_328fb4c6_a68d240c, 0x00000000_00000027_836cf69d_21306da7,
    0x00000000_00000026_d73b1e84_c86d6a97, 0x00000000_00000026_2dedb225_8e056974,
    0x00000000_00000025_87786b5f_a9c80a5a, 0x00000000_00000024_e3cf3774_29a635ac,
    0x00000000_00000024_42e63630_ed63beee, 0x00000000_00000023_a4b1b920_00382703,
    0x00000000_00000023_092642ba_42e4ced6, 0x00000000_00000022_7038859d_58fbf89b,
    0x00000000_00000021_d9dd63c4_cc4835ef, 0x00000000_00000021_4609edc6_597756c6,
    0x00000000_00000020_b4b36211_595e9bb8, 0x00000000_00000020_25cf2c31_3a5fd86f,
    0x00000000_0000001f_9952e412_fda85c01, 0x00000000_0000001f_0f344d4d_ac32df48,
    0x00000000_0000001e_8769566d_b7a56844, 0x00000000_0000001e_01e81843_3b530767,
    0x00000000_0000001d_7ea6d533_11d79382, 0x00000000_0000001c_fd9bf88a_b3f11584,
    0x00000000_0000001c_7ebe15d6_d56770e0, 0x00000000_0000001c_0203e83c_b4ff031a,
    0x00000000_0000001b_876451d6_149e76f3, 0x00000000_0000001b_0ed65b0f_cefae0f8,
    0x00000000_0000001a_9851320b_00476dbe, 0x00000000_0000001a_23cc2a00_b78f78f5,
    0x00000000_00000019_b13ebaa8_268ad196, 0x00000000_00000019_40a07f9f_45e43daa,
    0x00000000_00000018_d1e937d5_e412016f, 0x00000000_00000018_6510c4fb_150744aa,
    0x00000000_00000017_fa0f2aec_f92bafdd, 0x00000000_00000017_90dc8f2a_d22c8411,
    0x00000000_00000017_29713849_5c5fc584, 0x00000000_00000016_c3c58d69_6396d580,
    0x00000000_00000016_5fd215b0_8a620c9d, 0x00000000_00000015_fd8f77c4_3aea8e80,
    0x00000000_00000015_9cf67946_b8aaacef, 0x00000000_00000015_3dfffe56_4a6fc433,
    0x00000000_00000014_e0a5090e_743287b6, 0x00000000_00000014_84deb90b_38743e51,
    0x00000000_00000014_2aa64aee_58f0730b, 0x00000000_00000013_d1f517e6_8e9323d5,
    0x00000000_00000013_7ac49538_b0c37d4d, 0x00000000_00000013_250e53ca_c432bb60,
    0x00000000_00000012_d0cbffb0_e97dd40b, 0x00000000_00000012_7df75fbc_240f257f,
    0x00000000_00000012_2c8a550a_f1cb7dd3, 0x00000000_00000011_dc7eda9b_ac337915,
    0x00000000_00000011_8dcf04e0_abbf65b7, 0x00000000_00000011_40750156_2658a004,
    0x00000000_00000010_f46b1619_c1efa59d, 0x00000000_00000010_a9aba183_d44a035d,
    0x00000000_00000010_603119c2_493eb489, 0x00000000_00000010_17f60c75_28b292d3,
    0x00000000_0000000f_d0f51e4c_b5c115c8, 0x00000000_0000000f_8b290aa9_2097d6e5,
    0x00000000_0000000f_468ca33b_c4a51f6c, 0x00000000_0000000f_031acfa9_ecd32fed,
    0x00000000_0000000e_c0ce8d31_17a2f863, 0x00000000_0000000e_7fa2ee4c_b5119ceb,
    0x00000000_0000000e_3f931a5d_584c6714, 0x00000000_0000000e_009a4d51_574ea90c,
    0x00000000_0000000d_c2b3d74e_d29c9ef8, 0x00000000_0000000d_85db1c5f_1f6585ac,
    0x00000000_0000000d_4a0b941b_8e6dede2, 0x00000000_0000000d_0f40c95b_8a39c925,
    0x00000000_0000000c_d57659e4_0703cbbf, 0x00000000_0000000c_9ca7f618_3f2585fa,
    0x00000000_0000000c_64d160ab_b6a90851, 0x00000000_0000000c_2dee6e55_80d20377,
    0x00000000_0000000b_f7fb0584_c2811ee2, 0x00000000_0000000b_c2f31e16_6c68b8ed,
    0x00000000_0000000b_8ed2c10c_281e6b35, 0x00000000_0000000b_5b960844_7328861a,
    0x00000000_0000000b_29391e33_e33a4086, 0x00000000_0000000a_f7b83d9f_8ee4962d,
    0x00000000_0000000a_c70fb158_9614bfe4, 0x00000000_0000000a_973bd3f8_c5cbd865,
    0x00000000_0000000a_68390fa0_528d9ce4, 0x00000000_0000000a_3a03ddb4_a5164dc0,
    0x00000000_0000000a_0c98c6a0_34f980e1, 0x00000000_00000009_dff46193_6cdd3e99,
    0x00000000_00000009_b4135446_941603d7, 0x00000000_00000009_88f252bc_b9794250,
    0x00000000_00000009_5e8e1f07_9b4cb221, 0x00000000_00000009_34e3890c_884940ea,
    0x00000000_00000009_0bef6e4a_35b8a245, 0x00000000_00000008_e3aeb99f_86c47cae,
    0x00000000_00000008_bc1e6313_411de69e, 0x00000000_00000008_953b6f9c_ab3361a4,
    0x00000000_00000008_6f02f0ed_103abe58, 0x00000000_00000008_4972053a_266354cd,
    0x00000000_00000008_2485d709_5393c262, 0x00000000_00000008_003b9cfb_cd24e8c2,
    0x00000000_00000007_dc90999b_8f1a3b36, 0x00000000_00000007_b9821b29_27657fe0,
    0x00000000_00000007_970d7b6a_51d20b60, 0x00000000_00000007_75301f79_614126ed,
    0x00000000_00000007_53e77795_72eec4b6, 0x00000000_00000007_3330fef3_6882e46f,
    0x00000000_00000007_130a3b8f_a5c113b7, 0x00000000_00000006_f370be00_8eb44c17,
    0x00000000_00000006_d4622149_c3421343, 0x00000000_00000006_b5dc0ab0_151c3344,
    0x00000000_00000006_97dc298e_35149fb0, 0x00000000_00000006_7a60372a_14e32bed,
    0x00000000_00000006_5d65f68a_fa789569, 0x00000000_00000006_40eb3450_4206148f,
    0x00000000_00000006_24edc688_cbec2882, 0x00000000_00000006_096b8c8b_13cea54b,
    0x00000000_00000005_ee626ecd_ee1732ad, 0x00000000_00000005_d3d05ec1_e93a6409,
    0x00000000_00000005_b9b356ab_501e603b, 0x00000000_00000005_a009597c_cb0cb3e3,
    0x00000000_00000005_86d072b2_9ca36196, 0x00000000_00000005_6e06b62e_78439321,
    0x00000000_00000005_55aa4013_ef867510, 0x00000000_00000005_3db934a5_744ac3f7,
    0x00000000_00000005_2631c021_ecf768d1, 0x00000000_00000005_0f1216a2_d89930c9,
    0x00000000_00000004_f85873fb_008b351a, 0x00000000_00000004_e2031b95_b562e9d5,
    0x00000000_00000004_cc105856_94e2074a, 0x00000000_00000004_b67e7c79_d6b999b9,
    0x00000000_00000004_a14be175_1df276a7, 0x00000000_00000004_8c76e7d8_ccd826fe,
    0x00000000_00000004_77fdf731_d94c020c, 0x00000000_00000004_63df7dec_1f6ebf4b,
    0x00000000_00000004_5019f135_30972cfb, 0x00000000_00000004_3cabccdf_9c94ffce,
    0x00000000_00000004_29939346_b346d542, 0x00000000_00000004_16cfcd32_bc9286d9,
    0x00000000_00000004_045f09bd_a4d6d10d, 0x00000000_00000003_f23fde38_1bf515d6,
    0x00000000_00000003_e070e60f_2519a889, 0x00000000_00000003_cef0c2b2_15709826,
    0x00000000_00000003_bdbe1b78_fffc5647, 0x00000000_00000003_acd79d8b_8ccae46b,
    0x00000000_00000003_9c3bfbc8_39cd5f71, 0x00000000_00000003_8be9eeac_039cd2c9,
    0x00000000_00000003_7be0343a_747e31b1, 0x00000000_00000003_6c1d8fe6_17fe2e54,
    0x00000000_00000003_5ca0ca79_5184642f, 0x00000000_00000003_4d68b1ff_9443edf0,
    0x00000000_00000003_3e7419ae_faf60708, 0x00000000_00000003_2fc1d9d2_3dd1c70d,
    0x00000000_00000003_2150cfb3_053a58fb, 0x00000000_00000003_131fdd84_97a34b2b,
    0x00000000_00000003_052dea4e_e130b647, 0x00000000_00000002_f779e1d9_d39f0285,
    0x00000000_00000002_ea02b499_1d040336, 0x00000000_00000002_dcc75798_3400f962,
    0x00000000_00000002_cfc6c466_b802cf9b, 0x00000000_00000002_c2fff905_24338b40,
    0x00000000_00000002_b671f7d1_d3c582bd, 0x00000000_00000002_aa1bc776_56466567,
    0x00000000_00000002_9dfc72d5_12ad881a, 0x00000000_00000002_921308f7_37de3b27,
    0x00000000_00000002_865e9cfa_f95c2971, 0x00000000_00000002_7ade4602_16f4e769,
    0x00000000_00000002_6f911f20_ae26ea38, 0x00000000_00000002_6476474c_54131ce3,
    0x00000000_00000002_598ce14b_76cb3254, 0x00000000_00000002_4ed413a5_04d3a8c7,
    0x00000000_00000002_444b0890_59b534da, 0x00000000_00000002_39f0ede5_6e7df96d,
    0x00000000_00000002_2fc4f50d_4d178d21, 0x00000000_00000002_25c652f2_c55b57a2,
    0x00000000_00000002_1bf43ff3_62d347b9, 0x00000000_00000002_124df7d0_a219480d,
    0x00000000_00000002_08d2b9a1_64cc2b80, 0x00000000_00000001_ff81c7c3_a3150bd3,
    0x00000000_00000001_f65a67ce_59bc4587, 0x00000000_00000001_ed5be283_b3d15b83,
    0x00000000_00000001_e48583c3_6eed1bb7, 0x00000000_00000001_dbd69a7d_79195c81,
    0x00000000_00000001_d34e78a4_c76d988c, 0x00000000_00000001_caec7322_64738d77,
    0x00000000_00000001_c2afe1c8_b56acff7, 0x00000000_00000001_ba981f46_f586077e,
    0x00000000_00000001_b2a4891c_e6403376, 0x00000000_00000001_aad47f8e_b3ebfd21,
    0x00000000_00000001_a3276599_0da2abab, 0x00000000_00000001_9b9ca0e5_6fbbd3bd,
    0x00000000_00000001_943399be_9ffa51a9, 0x00000000_00000001_8cebbb05_5a9e84b1,
    0x00000000_00000001_85c47225_2f911be1, 0x00000000_00000001_7ebd2f09_8edd10f9,
    0x00000000_00000001_77d56413_03b2accb, 0x00000000_00000001_710c860c_9d30a202,
    0x00000000_00000001_6a620c21_84336fd9, 0x00000000_00000001_63d56fd2_bd6e564a,
    0x00000000_00000001_5d662ced_17143064, 0x00000000_00000001_5713c17f_41598874,
    0x00000000_00000001_50ddadd0_111c2c5b, 0x00000000_00000001_4ac37454_ebff6f3f,
    0x00000000_00000001_44c499a8_5d4f2092, 0x00000000_00000001_3ee0a480_d2fe0fd6,
    0x00000000_00000001_39171da7_8217b85d, 0x00000000_00000001_33678fef_71ff68d5,
    0x00000000_00000001_2dd1882c_add9e808, 0x00000000_00000001_2854952b_9b813ad6,
    0x00000000_00000001_22f047a8_7764c73e, 0x00000000_00000001_1da43246_f4ba9db5,
    0x00000000_00000001_186fe98a_016934d7, 0x00000000_00000001_135303cb_ad135c47,
    0x00000000_00000001_0e4d1935_32b299ff, 0x00000000_00000001_095dc3b7_242e8a2b,
    0x00000000_00000001_04849f01_b7623459, 0x00000000_00000000_ffc1487d_34029a37,
    0x00000000_00000000_fb135f42_81dc0bda, 0x00000000_00000000_f67a8413_d6de0bfd,
    0x00000000_00000000_f1f65955_846fc405, 0x00000000_00000000_ed868306_e38933f2,
    0x00000000_00000000_e92aa6bb_5f0f6da6, 0x00000000_00000000_e4e26b93_9bf445cc,
    0x00000000_00000000_e0ad7a36_be9bf68b, 0x00000000_00000000_dc8b7ccb_cd0d39f0,
    0x00000000_00000000_d87c1ef3_2d72631c, 0x00000000_00000000_d47f0dc0_4073f666,
    0x00000000_00000000_d093f7b3_16f73196, 0x00000000_00000000_ccba8cb2_42ccde52,
    0x00000000_00000000_c8f27e04_c1deaa2f, 0x00000000_00000000_c53b7e4c_036b1921,
    0x00000000_00000000_c195417e_06e1f92b, 0x00000000_00000000_bdff7cdf_93f50872,
    0x00000000_00000000_ba79e6fe_8b724208, 0x00000000_00000000_b70437ac_507f01b3,
    0x00000000_00000000_b39e27f8_49cce390, 0x00000000_00000000_b047722a_7a62f268,
    0x00000000_00000000_acffd1be_31975e42, 0x00000000_00000000_a9c7035c_d1d794f0,
    0x00000000_00000000_a69cc4d8_adde2fac, 0x00000000_00000000_a380d527_fbf7bbc5,
    0x00000000_00000000_a072f45f_def8f0b4, 0x00000000_00000000_9d72e3af_848a6be5,
    0x00000000_00000000_9a80655b_586f8a65, 0x00000000_00000000_979b3cb8_4c6f7217,
    0x00000000_00000000_94c32e27_3488cfb1, 0x00000000_00000000_91f7ff10_371a3c37,
    0x00000000_00000000_8f3975de_50aaa471, 0x00000000_00000000_8c8759fa_eafe6ea2,
    0x00000000_00000000_89e173c9_87277709, 0x00000000_00000000_87478ca3_7a3f5243,
    0x00000000_00000000_84b96ed3_bc7c95bf, 0x00000000_00000000_8236e592_ca55321d,
    0x00000000_00000000_7fbfbd02_97613192, 0x00000000_00000000_7d53c22a_92b26d94,
    0x00000000_00000000_7af2c2f3_bc570adc, 0x00000000_00000000_789c8e24_cbbdc1a2,
    0x00000000_00000000_7650f35e_66b429b8, 0x00000000_00000000_740fc317_68b86f19,
    0x00000000_00000000_71d8ce99_3a58fb60, 0x00000000_00000000_6fabe7fc_385dc3f5,
    0x00000000_00000000_6d88e224_2a780b2c, 0x00000000_00000000_6b6f90bc_c9367c96,
    0x00000000_00000000_695fc836_52fca1fd, 0x00000000_00000000_67595dc2_2fbdbf83,
    0x00000000_00000000_655c274f_a33c31b7, 0x00000000_00000000_6367fb88_8d8f70b8,
    0x00000000_00000000_617cb1ce_39b3df31, 0x00000000_00000000_5f9a2236_39e88bc5,
    0x00000000_00000000_5dc02587_51a006f9, 0x00000000_00000000_5bee9536_6cca671d,
    0x00000000_00000000_5a254b63_a43f8737, 0x00000000_00000000_586422d7_4f117d6a,
    0x00000000_00000000_56aaf6ff_20903105, 0x00000000_00000000_54f9a3eb_52c7e029,
    0x00000000_00000000_5350064b_dd454915, 0x00000000_00000000_51adfb6d_b7eb0b82,
    0x00000000_00000000_50136138_29a4b33f, 0x00000000_00000000_4e80162a_22c4b658,
    0x00000000_00000000_4cf3f957_a2db86bf, 0x00000000_00000000_4b6eea67_29d6a9b1,
    0x00000000_00000000_49f0c98f_343795ae, 0x00000000_00000000_48797793_c232e36d,
    0x00000000_00000000_4708d5c3_e9892638, 0x00000000_00000000_459ec5f7_71eb8514,
    0x00000000_00000000_443b2a8c_7bbeef9f, 0x00000000_00000000_42dde665_3111884f,
    0x00000000_00000000_4186dce5_809698e5, 0x00000000_00000000_4035f1f0_e27e1e90,
    0x00000000_00000000_3eeb09e8_26fdb070, 0x00000000_00000000_3da609a7_4e6135aa,
    0x00000000_00000000_3c66d683_6a7a8fce, 0x00000000_00000000_3b2d5648_89480b07,
    0x00000000_00000000_39f96f37_a8aa0f43, 0x00000000_00000000_38cb0804_b30134e2,
    0x00000000_00000000_37a207d4_848e83a3, 0x00000000_00000000_367e563a_f970445d,
    0x00000000_00000000_355fdb39_04166d23, 0x00000000_00000000_34467f3a_cc0a4be8,
    0x00000000_00000000_33322b15_d4e5adb6, 0x00000000_00000000_3222c807_2d5657e9,
    0x00000000_00000000_31183fb1_a60b3deb, 0x00000000_00000000_30127c1c_10697068,
    0x00000000_00000000_2f1167af_84e75312, 0x00000000_00000000_2e14ed35_b0ed33f5,
    0x00000000_00000000_2d1cf7d7_2c1aeab5, 0x00000000_00000000_2c297319_d4d2af4e,
    0x00000000_00000000_2b3a4adf_33e9df01, 0x00000000_00000000_2a4f6b62_e760eaa4,
    0x00000000_00000000_2968c139_14042c5f, 0x00000000_00000000_2886394c_ddd7e32c,
    0x00000000_00000000_27a7c0de_e73210d7, 0x00000000_00000000_26cd4583_d6657391,
    0x00000000_00000000_25f6b522_e1e14e63, 0x00000000_00000000_2523fdf4_62aa2c09,
    0x00000000_00000000_24550e80_6d103e1d, 0x00000000_00000000_2389d59d_6f886ebf,
    0x00000000_00000000_22c2426e_d78dad6f, 0x00000000_00000000_21fe4463_bc70705a,
    0x00000000_00000000_213dcb35_8ffad213, 0x00000000_00000000_2080c6e6_d4d020a1,
    0x00000000_00000000_1fc727c1_da6f1dfd, 0x00000000_00000000_1f10de57_7ebe9b5b,
    0x00000000_00000000_1e5ddb7d_f50c8070, 0x00000000_00000000_1dae104f_9267b5a6,
    0x00000000_00000000_1d016e29_9f3dcca7, 0x00000000_00000000_1c57e6ab_2e25a532,
    0x00000000_00000000_1bb16bb3_f7c0ad38, 0x00000000_00000000_1b0def63_3b9cbaa6,
    0x00000000_00000000_1a6d6416_a600db31, 0x00000000_00000000_19cfbc69_3a8fd2b4,
    0x00000000_00000000_1934eb32_43ab5b8b, 0x00000000_00000000_189ce384_468395a5,
    0x00000000_00000000_180798ab_fbbe68d6, 0x00000000_00000000_1774fe2f_4ca2f562,
    0x00000000_00000000_16e507cc_54b582bc, 0x00000000_00000000_1657a978_67b0afeb,
    0x00000000_00000000_15ccd75f_1bc8fb61, 0x00000000_00000000_154485e1_582808d1,
    0x00000000_00000000_14bea994_678d5b23, 0x00000000_00000000_143b3741_0f0286d3,
    0x00000000_00000000_13ba23e2_a8912e0a, 0x00000000_00000000_133b64a6_41e96341,
    0x00000000_00000000_12beeee9_bee759d9, 0x00000000_00000000_1244b83a_ffe7951c,
    0x00000000_00000000_11ccb657_0bd90e26, 0x00000000_00000000_1156df29_3dfd1005,
    0x00000000_00000000_10e328ca_7744cef2, 0x00000000_00000000_10718980_533d0407,
    0x00000000_00000000_1001f7bc_60781a33, 0x00000000_00000000_0f946a1b_5c67bb5f,
    0x00000000_00000000_0f28d764_7296cde6, 0x00000000_00000000_0ebf3688_7f353290,
    0x00000000_00000000_0e577ea1_54e6d231, 0x00000000_00000000_0df1a6f1_05c7c834,
    0x00000000_00000000_0d8da6e1_2f97b40a, 0x00000000_00000000_0d2b7602_4afe77a2,
    0x00000000_00000000_0ccb0c0a_fddce3d9, 0x00000000_00000000_0c6c60d7_709c0ddc,
    0x00000000_00000000_0c0f6c68_a66e4171, 0x00000000_00000000_0bb426e3_d874bc36,
    0x00000000_00000000_0b5a8891_d3bd9504, 0x00000000_00000000_0b0289de_5a0d68da,
    0x00000000_00000000_0aac2357_85689c12, 0x00000000_00000000_0a574dad_2e50330f,
    0x00000000_00000000_0a0401b0_54a67928, 0x00000000_00000000_09b23852_8b2fdf4d,
    0x00000000_00000000_0961eaa5_65a4adc7, 0x00000000_00000000_091311d9_e948557e,
    0x00000000_00000000_08c5a73f_fffb5d79, 0x00000000_00000000_0879a445_edbd18a5,
    0x00000000_00000000_082f0277_c8927ec1, 0x00000000_00000000_07e5bb7e_f2c7b0f9,
    0x00000000_00000000_079dc921_9781e011, 0x00000000_00000000_07572542_2997762e,
    0x00000000_00000000_0711c9de_e4a49215, 0x00000000_00000000_06cdb111_50520c80,
    0x00000000_00000000_068ad50d_c5c56a79, 0x00000000_00000000_06493022_f7304910,
    0x00000000_00000000_0608bcb9_7975f79e, 0x00000000_00000000_05c97553_4fde1de5,
    0x00000000_00000000_058b548b_79cb72d3, 0x00000000_00000000_054e5515_826daf6e,
    0x00000000_00000000_051271bd_12660fb3, 0x00000000_00000000_04d7a565_8355d89e,
    0x00000000_00000000_049deb09_754e7f7d, 0x00000000_00000000_04653dba_661b3303,
    0x00000000_00000000_042d98a0_4a5baa35, 0x00000000_00000000_03f6f6f9_28684058,
    0x00000000_00000000_03c15418_b4f787a2, 0x00000000_00000000_038cab67_f17d9e38,
    0x00000000_00000000_0358f864_cc3db27f, 0x00000000_00000000_032636a1_c2064481,
    0x00000000_00000000_02f461c5_8190d26b, 0x00000000_00000000_02c3758a_907dbdf1,
    0x00000000_00000000_02936dbe_f1e5576b, 0x00000000_00000000_02644643_ce771a6a,
    0x00000000_00000000_0235fb0d_1e204563, 0x00000000_00000000_02088821_533313f4,
    0x00000000_00000000_01dbe999_0708003c, 0x00000000_00000000_01b01b9e_a8128c99,
    0x00000000_00000000_01851a6e_29633324, 0x00000000_00000000_015ae254_b3903415,
    0x00000000_00000000_01316fb0_56ff177b, 0x00000000_00000000_0108beef_bf88d174,
    0x00000000_00000000_00e0cc91_e9729269, 0x00000000_00000000_00b99525_d7b566d0,
    0x00000000_00000000_0093154a_4b8ee35a, 0x00000000_00000000_006d49ad_7d553387,
    0x00000000_00000000_00482f0c_d688f93e, 0x00000000_00000000_0023c234_ad1f843d,
];
