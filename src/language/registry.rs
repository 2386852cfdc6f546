// Generated from the CLD2 language enumeration. Index == numeric language code.

use super::LanguageEntry;

pub(super) const LANGUAGE_TABLE: [LanguageEntry; 614] = [
    LanguageEntry { code: "en", cname: "ENGLISH", name: "English" }, // 0
    LanguageEntry { code: "da", cname: "DANISH", name: "Danish" }, // 1
    LanguageEntry { code: "nl", cname: "DUTCH", name: "Dutch" }, // 2
    LanguageEntry { code: "fi", cname: "FINNISH", name: "Finnish" }, // 3
    LanguageEntry { code: "fr", cname: "FRENCH", name: "French" }, // 4
    LanguageEntry { code: "de", cname: "GERMAN", name: "German" }, // 5
    LanguageEntry { code: "iw", cname: "HEBREW", name: "Hebrew" }, // 6
    LanguageEntry { code: "it", cname: "ITALIAN", name: "Italian" }, // 7
    LanguageEntry { code: "ja", cname: "JAPANESE", name: "Japanese" }, // 8
    LanguageEntry { code: "ko", cname: "KOREAN", name: "Korean" }, // 9
    LanguageEntry { code: "no", cname: "NORWEGIAN", name: "Norwegian" }, // 10
    LanguageEntry { code: "pl", cname: "POLISH", name: "Polish" }, // 11
    LanguageEntry { code: "pt", cname: "PORTUGUESE", name: "Portuguese" }, // 12
    LanguageEntry { code: "ru", cname: "RUSSIAN", name: "Russian" }, // 13
    LanguageEntry { code: "es", cname: "SPANISH", name: "Spanish" }, // 14
    LanguageEntry { code: "sv", cname: "SWEDISH", name: "Swedish" }, // 15
    LanguageEntry { code: "zh", cname: "CHINESE", name: "Chinese" }, // 16
    LanguageEntry { code: "cs", cname: "CZECH", name: "Czech" }, // 17
    LanguageEntry { code: "el", cname: "GREEK", name: "Greek" }, // 18
    LanguageEntry { code: "is", cname: "ICELANDIC", name: "Icelandic" }, // 19
    LanguageEntry { code: "lv", cname: "LATVIAN", name: "Latvian" }, // 20
    LanguageEntry { code: "lt", cname: "LITHUANIAN", name: "Lithuanian" }, // 21
    LanguageEntry { code: "ro", cname: "ROMANIAN", name: "Romanian" }, // 22
    LanguageEntry { code: "hu", cname: "HUNGARIAN", name: "Hungarian" }, // 23
    LanguageEntry { code: "et", cname: "ESTONIAN", name: "Estonian" }, // 24
    LanguageEntry { code: "xxx", cname: "TG_UNKNOWN_LANGUAGE", name: "Tg unknown language" }, // 25
    LanguageEntry { code: "un", cname: "UNKNOWN_LANGUAGE", name: "Unknown" }, // 26
    LanguageEntry { code: "bg", cname: "BULGARIAN", name: "Bulgarian" }, // 27
    LanguageEntry { code: "hr", cname: "CROATIAN", name: "Croatian" }, // 28
    LanguageEntry { code: "sr", cname: "SERBIAN", name: "Serbian" }, // 29
    LanguageEntry { code: "ga", cname: "IRISH", name: "Irish" }, // 30
    LanguageEntry { code: "gl", cname: "GALICIAN", name: "Galician" }, // 31
    LanguageEntry { code: "tl", cname: "TAGALOG", name: "Tagalog" }, // 32
    LanguageEntry { code: "tr", cname: "TURKISH", name: "Turkish" }, // 33
    LanguageEntry { code: "uk", cname: "UKRAINIAN", name: "Ukrainian" }, // 34
    LanguageEntry { code: "hi", cname: "HINDI", name: "Hindi" }, // 35
    LanguageEntry { code: "mk", cname: "MACEDONIAN", name: "Macedonian" }, // 36
    LanguageEntry { code: "bn", cname: "BENGALI", name: "Bengali" }, // 37
    LanguageEntry { code: "id", cname: "INDONESIAN", name: "Indonesian" }, // 38
    LanguageEntry { code: "la", cname: "LATIN", name: "Latin" }, // 39
    LanguageEntry { code: "ms", cname: "MALAY", name: "Malay" }, // 40
    LanguageEntry { code: "ml", cname: "MALAYALAM", name: "Malayalam" }, // 41
    LanguageEntry { code: "cy", cname: "WELSH", name: "Welsh" }, // 42
    LanguageEntry { code: "ne", cname: "NEPALI", name: "Nepali" }, // 43
    LanguageEntry { code: "te", cname: "TELUGU", name: "Telugu" }, // 44
    LanguageEntry { code: "sq", cname: "ALBANIAN", name: "Albanian" }, // 45
    LanguageEntry { code: "ta", cname: "TAMIL", name: "Tamil" }, // 46
    LanguageEntry { code: "be", cname: "BELARUSIAN", name: "Belarusian" }, // 47
    LanguageEntry { code: "jw", cname: "JAVANESE", name: "Javanese" }, // 48
    LanguageEntry { code: "oc", cname: "OCCITAN", name: "Occitan" }, // 49
    LanguageEntry { code: "ur", cname: "URDU", name: "Urdu" }, // 50
    LanguageEntry { code: "bh", cname: "BIHARI", name: "Bihari" }, // 51
    LanguageEntry { code: "gu", cname: "GUJARATI", name: "Gujarati" }, // 52
    LanguageEntry { code: "th", cname: "THAI", name: "Thai" }, // 53
    LanguageEntry { code: "ar", cname: "ARABIC", name: "Arabic" }, // 54
    LanguageEntry { code: "ca", cname: "CATALAN", name: "Catalan" }, // 55
    LanguageEntry { code: "eo", cname: "ESPERANTO", name: "Esperanto" }, // 56
    LanguageEntry { code: "eu", cname: "BASQUE", name: "Basque" }, // 57
    LanguageEntry { code: "ia", cname: "INTERLINGUA", name: "Interlingua" }, // 58
    LanguageEntry { code: "kn", cname: "KANNADA", name: "Kannada" }, // 59
    LanguageEntry { code: "pa", cname: "PUNJABI", name: "Punjabi" }, // 60
    LanguageEntry { code: "gd", cname: "SCOTS_GAELIC", name: "Scots gaelic" }, // 61
    LanguageEntry { code: "sw", cname: "SWAHILI", name: "Swahili" }, // 62
    LanguageEntry { code: "sl", cname: "SLOVENIAN", name: "Slovenian" }, // 63
    LanguageEntry { code: "mr", cname: "MARATHI", name: "Marathi" }, // 64
    LanguageEntry { code: "mt", cname: "MALTESE", name: "Maltese" }, // 65
    LanguageEntry { code: "vi", cname: "VIETNAMESE", name: "Vietnamese" }, // 66
    LanguageEntry { code: "fy", cname: "FRISIAN", name: "Frisian" }, // 67
    LanguageEntry { code: "sk", cname: "SLOVAK", name: "Slovak" }, // 68
    LanguageEntry { code: "zh-Hant", cname: "CHINESE_T", name: "Chinese t" }, // 69
    LanguageEntry { code: "fo", cname: "FAROESE", name: "Faroese" }, // 70
    LanguageEntry { code: "su", cname: "SUNDANESE", name: "Sundanese" }, // 71
    LanguageEntry { code: "uz", cname: "UZBEK", name: "Uzbek" }, // 72
    LanguageEntry { code: "am", cname: "AMHARIC", name: "Amharic" }, // 73
    LanguageEntry { code: "az", cname: "AZERBAIJANI", name: "Azerbaijani" }, // 74
    LanguageEntry { code: "ka", cname: "GEORGIAN", name: "Georgian" }, // 75
    LanguageEntry { code: "ti", cname: "TIGRINYA", name: "Tigrinya" }, // 76
    LanguageEntry { code: "fa", cname: "PERSIAN", name: "Persian" }, // 77
    LanguageEntry { code: "bs", cname: "BOSNIAN", name: "Bosnian" }, // 78
    LanguageEntry { code: "si", cname: "SINHALESE", name: "Sinhalese" }, // 79
    LanguageEntry { code: "nn", cname: "NORWEGIAN_N", name: "Norwegian n" }, // 80
    LanguageEntry { code: "", cname: "X_81", name: "X 81" }, // 81
    LanguageEntry { code: "", cname: "X_82", name: "X 82" }, // 82
    LanguageEntry { code: "xh", cname: "XHOSA", name: "Xhosa" }, // 83
    LanguageEntry { code: "zu", cname: "ZULU", name: "Zulu" }, // 84
    LanguageEntry { code: "gn", cname: "GUARANI", name: "Guarani" }, // 85
    LanguageEntry { code: "st", cname: "SESOTHO", name: "Sesotho" }, // 86
    LanguageEntry { code: "tk", cname: "TURKMEN", name: "Turkmen" }, // 87
    LanguageEntry { code: "ky", cname: "KYRGYZ", name: "Kyrgyz" }, // 88
    LanguageEntry { code: "br", cname: "BRETON", name: "Breton" }, // 89
    LanguageEntry { code: "tw", cname: "TWI", name: "Twi" }, // 90
    LanguageEntry { code: "yi", cname: "YIDDISH", name: "Yiddish" }, // 91
    LanguageEntry { code: "", cname: "X_92", name: "X 92" }, // 92
    LanguageEntry { code: "so", cname: "SOMALI", name: "Somali" }, // 93
    LanguageEntry { code: "ug", cname: "UIGHUR", name: "Uighur" }, // 94
    LanguageEntry { code: "ku", cname: "KURDISH", name: "Kurdish" }, // 95
    LanguageEntry { code: "mn", cname: "MONGOLIAN", name: "Mongolian" }, // 96
    LanguageEntry { code: "hy", cname: "ARMENIAN", name: "Armenian" }, // 97
    LanguageEntry { code: "lo", cname: "LAOTHIAN", name: "Laothian" }, // 98
    LanguageEntry { code: "sd", cname: "SINDHI", name: "Sindhi" }, // 99
    LanguageEntry { code: "rm", cname: "RHAETO_ROMANCE", name: "Rhaeto romance" }, // 100
    LanguageEntry { code: "af", cname: "AFRIKAANS", name: "Afrikaans" }, // 101
    LanguageEntry { code: "lb", cname: "LUXEMBOURGISH", name: "Luxembourgish" }, // 102
    LanguageEntry { code: "my", cname: "BURMESE", name: "Burmese" }, // 103
    LanguageEntry { code: "km", cname: "KHMER", name: "Khmer" }, // 104
    LanguageEntry { code: "bo", cname: "TIBETAN", name: "Tibetan" }, // 105
    LanguageEntry { code: "dv", cname: "DHIVEHI", name: "Dhivehi" }, // 106
    LanguageEntry { code: "chr", cname: "CHEROKEE", name: "Cherokee" }, // 107
    LanguageEntry { code: "syr", cname: "SYRIAC", name: "Syriac" }, // 108
    LanguageEntry { code: "lif", cname: "LIMBU", name: "Limbu" }, // 109
    LanguageEntry { code: "or", cname: "ORIYA", name: "Oriya" }, // 110
    LanguageEntry { code: "as", cname: "ASSAMESE", name: "Assamese" }, // 111
    LanguageEntry { code: "co", cname: "CORSICAN", name: "Corsican" }, // 112
    LanguageEntry { code: "ie", cname: "INTERLINGUE", name: "Interlingue" }, // 113
    LanguageEntry { code: "kk", cname: "KAZAKH", name: "Kazakh" }, // 114
    LanguageEntry { code: "ln", cname: "LINGALA", name: "Lingala" }, // 115
    LanguageEntry { code: "", cname: "X_116", name: "X 116" }, // 116
    LanguageEntry { code: "ps", cname: "PASHTO", name: "Pashto" }, // 117
    LanguageEntry { code: "qu", cname: "QUECHUA", name: "Quechua" }, // 118
    LanguageEntry { code: "sn", cname: "SHONA", name: "Shona" }, // 119
    LanguageEntry { code: "tg", cname: "TAJIK", name: "Tajik" }, // 120
    LanguageEntry { code: "tt", cname: "TATAR", name: "Tatar" }, // 121
    LanguageEntry { code: "to", cname: "TONGA", name: "Tonga" }, // 122
    LanguageEntry { code: "yo", cname: "YORUBA", name: "Yoruba" }, // 123
    LanguageEntry { code: "", cname: "X_124", name: "X 124" }, // 124
    LanguageEntry { code: "", cname: "X_125", name: "X 125" }, // 125
    LanguageEntry { code: "", cname: "X_126", name: "X 126" }, // 126
    LanguageEntry { code: "", cname: "X_127", name: "X 127" }, // 127
    LanguageEntry { code: "mi", cname: "MAORI", name: "Maori" }, // 128
    LanguageEntry { code: "wo", cname: "WOLOF", name: "Wolof" }, // 129
    LanguageEntry { code: "ab", cname: "ABKHAZIAN", name: "Abkhazian" }, // 130
    LanguageEntry { code: "aa", cname: "AFAR", name: "Afar" }, // 131
    LanguageEntry { code: "ay", cname: "AYMARA", name: "Aymara" }, // 132
    LanguageEntry { code: "ba", cname: "BASHKIR", name: "Bashkir" }, // 133
    LanguageEntry { code: "bi", cname: "BISLAMA", name: "Bislama" }, // 134
    LanguageEntry { code: "dz", cname: "DZONGKHA", name: "Dzongkha" }, // 135
    LanguageEntry { code: "fj", cname: "FIJIAN", name: "Fijian" }, // 136
    LanguageEntry { code: "kl", cname: "GREENLANDIC", name: "Greenlandic" }, // 137
    LanguageEntry { code: "ha", cname: "HAUSA", name: "Hausa" }, // 138
    LanguageEntry { code: "ht", cname: "HAITIAN_CREOLE", name: "Haitian creole" }, // 139
    LanguageEntry { code: "ik", cname: "INUPIAK", name: "Inupiak" }, // 140
    LanguageEntry { code: "iu", cname: "INUKTITUT", name: "Inuktitut" }, // 141
    LanguageEntry { code: "ks", cname: "KASHMIRI", name: "Kashmiri" }, // 142
    LanguageEntry { code: "rw", cname: "KINYARWANDA", name: "Kinyarwanda" }, // 143
    LanguageEntry { code: "mg", cname: "MALAGASY", name: "Malagasy" }, // 144
    LanguageEntry { code: "na", cname: "NAURU", name: "Nauru" }, // 145
    LanguageEntry { code: "om", cname: "OROMO", name: "Oromo" }, // 146
    LanguageEntry { code: "rn", cname: "RUNDI", name: "Rundi" }, // 147
    LanguageEntry { code: "sm", cname: "SAMOAN", name: "Samoan" }, // 148
    LanguageEntry { code: "sg", cname: "SANGO", name: "Sango" }, // 149
    LanguageEntry { code: "sa", cname: "SANSKRIT", name: "Sanskrit" }, // 150
    LanguageEntry { code: "ss", cname: "SISWANT", name: "Siswant" }, // 151
    LanguageEntry { code: "ts", cname: "TSONGA", name: "Tsonga" }, // 152
    LanguageEntry { code: "tn", cname: "TSWANA", name: "Tswana" }, // 153
    LanguageEntry { code: "vo", cname: "VOLAPUK", name: "Volapuk" }, // 154
    LanguageEntry { code: "za", cname: "ZHUANG", name: "Zhuang" }, // 155
    LanguageEntry { code: "kha", cname: "KHASI", name: "Khasi" }, // 156
    LanguageEntry { code: "sco", cname: "SCOTS", name: "Scots" }, // 157
    LanguageEntry { code: "lg", cname: "GANDA", name: "Ganda" }, // 158
    LanguageEntry { code: "gv", cname: "MANX", name: "Manx" }, // 159
    LanguageEntry { code: "sr-ME", cname: "MONTENEGRIN", name: "Montenegrin" }, // 160
    LanguageEntry { code: "ak", cname: "AKAN", name: "Akan" }, // 161
    LanguageEntry { code: "ig", cname: "IGBO", name: "Igbo" }, // 162
    LanguageEntry { code: "mfe", cname: "MAURITIAN_CREOLE", name: "Mauritian creole" }, // 163
    LanguageEntry { code: "haw", cname: "HAWAIIAN", name: "Hawaiian" }, // 164
    LanguageEntry { code: "ceb", cname: "CEBUANO", name: "Cebuano" }, // 165
    LanguageEntry { code: "ee", cname: "EWE", name: "Ewe" }, // 166
    LanguageEntry { code: "gaa", cname: "GA", name: "Ga" }, // 167
    LanguageEntry { code: "hmn", cname: "HMONG", name: "Hmong" }, // 168
    LanguageEntry { code: "kri", cname: "KRIO", name: "Krio" }, // 169
    LanguageEntry { code: "loz", cname: "LOZI", name: "Lozi" }, // 170
    LanguageEntry { code: "lua", cname: "LUBA_LULUA", name: "Luba lulua" }, // 171
    LanguageEntry { code: "luo", cname: "LUO_KENYA_AND_TANZANIA", name: "Luo kenya and tanzania" }, // 172
    LanguageEntry { code: "new", cname: "NEWARI", name: "Newari" }, // 173
    LanguageEntry { code: "ny", cname: "NYANJA", name: "Nyanja" }, // 174
    LanguageEntry { code: "os", cname: "OSSETIAN", name: "Ossetian" }, // 175
    LanguageEntry { code: "pam", cname: "PAMPANGA", name: "Pampanga" }, // 176
    LanguageEntry { code: "nso", cname: "PEDI", name: "Pedi" }, // 177
    LanguageEntry { code: "raj", cname: "RAJASTHANI", name: "Rajasthani" }, // 178
    LanguageEntry { code: "crs", cname: "SESELWA", name: "Seselwa" }, // 179
    LanguageEntry { code: "tum", cname: "TUMBUKA", name: "Tumbuka" }, // 180
    LanguageEntry { code: "ve", cname: "VENDA", name: "Venda" }, // 181
    LanguageEntry { code: "war", cname: "WARAY_PHILIPPINES", name: "Waray philippines" }, // 182
    LanguageEntry { code: "", cname: "X_183", name: "X 183" }, // 183
    LanguageEntry { code: "", cname: "X_184", name: "X 184" }, // 184
    LanguageEntry { code: "", cname: "X_185", name: "X 185" }, // 185
    LanguageEntry { code: "", cname: "X_186", name: "X 186" }, // 186
    LanguageEntry { code: "", cname: "X_187", name: "X 187" }, // 187
    LanguageEntry { code: "", cname: "X_188", name: "X 188" }, // 188
    LanguageEntry { code: "", cname: "X_189", name: "X 189" }, // 189
    LanguageEntry { code: "", cname: "X_190", name: "X 190" }, // 190
    LanguageEntry { code: "", cname: "X_191", name: "X 191" }, // 191
    LanguageEntry { code: "", cname: "X_192", name: "X 192" }, // 192
    LanguageEntry { code: "", cname: "X_193", name: "X 193" }, // 193
    LanguageEntry { code: "", cname: "X_194", name: "X 194" }, // 194
    LanguageEntry { code: "", cname: "X_195", name: "X 195" }, // 195
    LanguageEntry { code: "", cname: "X_196", name: "X 196" }, // 196
    LanguageEntry { code: "", cname: "X_197", name: "X 197" }, // 197
    LanguageEntry { code: "", cname: "X_198", name: "X 198" }, // 198
    LanguageEntry { code: "", cname: "X_199", name: "X 199" }, // 199
    LanguageEntry { code: "", cname: "X_200", name: "X 200" }, // 200
    LanguageEntry { code: "", cname: "X_201", name: "X 201" }, // 201
    LanguageEntry { code: "", cname: "X_202", name: "X 202" }, // 202
    LanguageEntry { code: "", cname: "X_203", name: "X 203" }, // 203
    LanguageEntry { code: "", cname: "X_204", name: "X 204" }, // 204
    LanguageEntry { code: "", cname: "X_205", name: "X 205" }, // 205
    LanguageEntry { code: "", cname: "X_206", name: "X 206" }, // 206
    LanguageEntry { code: "", cname: "X_207", name: "X 207" }, // 207
    LanguageEntry { code: "", cname: "X_208", name: "X 208" }, // 208
    LanguageEntry { code: "", cname: "X_209", name: "X 209" }, // 209
    LanguageEntry { code: "", cname: "X_210", name: "X 210" }, // 210
    LanguageEntry { code: "", cname: "X_211", name: "X 211" }, // 211
    LanguageEntry { code: "", cname: "X_212", name: "X 212" }, // 212
    LanguageEntry { code: "", cname: "X_213", name: "X 213" }, // 213
    LanguageEntry { code: "", cname: "X_214", name: "X 214" }, // 214
    LanguageEntry { code: "", cname: "X_215", name: "X 215" }, // 215
    LanguageEntry { code: "", cname: "X_216", name: "X 216" }, // 216
    LanguageEntry { code: "", cname: "X_217", name: "X 217" }, // 217
    LanguageEntry { code: "", cname: "X_218", name: "X 218" }, // 218
    LanguageEntry { code: "", cname: "X_219", name: "X 219" }, // 219
    LanguageEntry { code: "", cname: "X_220", name: "X 220" }, // 220
    LanguageEntry { code: "", cname: "X_221", name: "X 221" }, // 221
    LanguageEntry { code: "", cname: "X_222", name: "X 222" }, // 222
    LanguageEntry { code: "", cname: "X_223", name: "X 223" }, // 223
    LanguageEntry { code: "", cname: "X_224", name: "X 224" }, // 224
    LanguageEntry { code: "", cname: "X_225", name: "X 225" }, // 225
    LanguageEntry { code: "", cname: "X_226", name: "X 226" }, // 226
    LanguageEntry { code: "", cname: "X_227", name: "X 227" }, // 227
    LanguageEntry { code: "", cname: "X_228", name: "X 228" }, // 228
    LanguageEntry { code: "", cname: "X_229", name: "X 229" }, // 229
    LanguageEntry { code: "", cname: "X_230", name: "X 230" }, // 230
    LanguageEntry { code: "", cname: "X_231", name: "X 231" }, // 231
    LanguageEntry { code: "", cname: "X_232", name: "X 232" }, // 232
    LanguageEntry { code: "", cname: "X_233", name: "X 233" }, // 233
    LanguageEntry { code: "", cname: "X_234", name: "X 234" }, // 234
    LanguageEntry { code: "", cname: "X_235", name: "X 235" }, // 235
    LanguageEntry { code: "", cname: "X_236", name: "X 236" }, // 236
    LanguageEntry { code: "", cname: "X_237", name: "X 237" }, // 237
    LanguageEntry { code: "", cname: "X_238", name: "X 238" }, // 238
    LanguageEntry { code: "", cname: "X_239", name: "X 239" }, // 239
    LanguageEntry { code: "", cname: "X_240", name: "X 240" }, // 240
    LanguageEntry { code: "", cname: "X_241", name: "X 241" }, // 241
    LanguageEntry { code: "", cname: "X_242", name: "X 242" }, // 242
    LanguageEntry { code: "", cname: "X_243", name: "X 243" }, // 243
    LanguageEntry { code: "", cname: "X_244", name: "X 244" }, // 244
    LanguageEntry { code: "", cname: "X_245", name: "X 245" }, // 245
    LanguageEntry { code: "", cname: "X_246", name: "X 246" }, // 246
    LanguageEntry { code: "", cname: "X_247", name: "X 247" }, // 247
    LanguageEntry { code: "", cname: "X_248", name: "X 248" }, // 248
    LanguageEntry { code: "", cname: "X_249", name: "X 249" }, // 249
    LanguageEntry { code: "", cname: "X_250", name: "X 250" }, // 250
    LanguageEntry { code: "", cname: "X_251", name: "X 251" }, // 251
    LanguageEntry { code: "", cname: "X_252", name: "X 252" }, // 252
    LanguageEntry { code: "", cname: "X_253", name: "X 253" }, // 253
    LanguageEntry { code: "", cname: "X_254", name: "X 254" }, // 254
    LanguageEntry { code: "", cname: "X_255", name: "X 255" }, // 255
    LanguageEntry { code: "", cname: "X_256", name: "X 256" }, // 256
    LanguageEntry { code: "", cname: "X_257", name: "X 257" }, // 257
    LanguageEntry { code: "", cname: "X_258", name: "X 258" }, // 258
    LanguageEntry { code: "", cname: "X_259", name: "X 259" }, // 259
    LanguageEntry { code: "", cname: "X_260", name: "X 260" }, // 260
    LanguageEntry { code: "", cname: "X_261", name: "X 261" }, // 261
    LanguageEntry { code: "", cname: "X_262", name: "X 262" }, // 262
    LanguageEntry { code: "", cname: "X_263", name: "X 263" }, // 263
    LanguageEntry { code: "", cname: "X_264", name: "X 264" }, // 264
    LanguageEntry { code: "", cname: "X_265", name: "X 265" }, // 265
    LanguageEntry { code: "", cname: "X_266", name: "X 266" }, // 266
    LanguageEntry { code: "", cname: "X_267", name: "X 267" }, // 267
    LanguageEntry { code: "", cname: "X_268", name: "X 268" }, // 268
    LanguageEntry { code: "", cname: "X_269", name: "X 269" }, // 269
    LanguageEntry { code: "", cname: "X_270", name: "X 270" }, // 270
    LanguageEntry { code: "", cname: "X_271", name: "X 271" }, // 271
    LanguageEntry { code: "", cname: "X_272", name: "X 272" }, // 272
    LanguageEntry { code: "", cname: "X_273", name: "X 273" }, // 273
    LanguageEntry { code: "", cname: "X_274", name: "X 274" }, // 274
    LanguageEntry { code: "", cname: "X_275", name: "X 275" }, // 275
    LanguageEntry { code: "", cname: "X_276", name: "X 276" }, // 276
    LanguageEntry { code: "", cname: "X_277", name: "X 277" }, // 277
    LanguageEntry { code: "", cname: "X_278", name: "X 278" }, // 278
    LanguageEntry { code: "", cname: "X_279", name: "X 279" }, // 279
    LanguageEntry { code: "", cname: "X_280", name: "X 280" }, // 280
    LanguageEntry { code: "", cname: "X_281", name: "X 281" }, // 281
    LanguageEntry { code: "", cname: "X_282", name: "X 282" }, // 282
    LanguageEntry { code: "", cname: "X_283", name: "X 283" }, // 283
    LanguageEntry { code: "", cname: "X_284", name: "X 284" }, // 284
    LanguageEntry { code: "", cname: "X_285", name: "X 285" }, // 285
    LanguageEntry { code: "", cname: "X_286", name: "X 286" }, // 286
    LanguageEntry { code: "", cname: "X_287", name: "X 287" }, // 287
    LanguageEntry { code: "", cname: "X_288", name: "X 288" }, // 288
    LanguageEntry { code: "", cname: "X_289", name: "X 289" }, // 289
    LanguageEntry { code: "", cname: "X_290", name: "X 290" }, // 290
    LanguageEntry { code: "", cname: "X_291", name: "X 291" }, // 291
    LanguageEntry { code: "", cname: "X_292", name: "X 292" }, // 292
    LanguageEntry { code: "", cname: "X_293", name: "X 293" }, // 293
    LanguageEntry { code: "", cname: "X_294", name: "X 294" }, // 294
    LanguageEntry { code: "", cname: "X_295", name: "X 295" }, // 295
    LanguageEntry { code: "", cname: "X_296", name: "X 296" }, // 296
    LanguageEntry { code: "", cname: "X_297", name: "X 297" }, // 297
    LanguageEntry { code: "", cname: "X_298", name: "X 298" }, // 298
    LanguageEntry { code: "", cname: "X_299", name: "X 299" }, // 299
    LanguageEntry { code: "", cname: "X_300", name: "X 300" }, // 300
    LanguageEntry { code: "", cname: "X_301", name: "X 301" }, // 301
    LanguageEntry { code: "", cname: "X_302", name: "X 302" }, // 302
    LanguageEntry { code: "", cname: "X_303", name: "X 303" }, // 303
    LanguageEntry { code: "", cname: "X_304", name: "X 304" }, // 304
    LanguageEntry { code: "", cname: "X_305", name: "X 305" }, // 305
    LanguageEntry { code: "", cname: "X_306", name: "X 306" }, // 306
    LanguageEntry { code: "", cname: "X_307", name: "X 307" }, // 307
    LanguageEntry { code: "", cname: "X_308", name: "X 308" }, // 308
    LanguageEntry { code: "", cname: "X_309", name: "X 309" }, // 309
    LanguageEntry { code: "", cname: "X_310", name: "X 310" }, // 310
    LanguageEntry { code: "", cname: "X_311", name: "X 311" }, // 311
    LanguageEntry { code: "", cname: "X_312", name: "X 312" }, // 312
    LanguageEntry { code: "", cname: "X_313", name: "X 313" }, // 313
    LanguageEntry { code: "", cname: "X_314", name: "X 314" }, // 314
    LanguageEntry { code: "", cname: "X_315", name: "X 315" }, // 315
    LanguageEntry { code: "", cname: "X_316", name: "X 316" }, // 316
    LanguageEntry { code: "", cname: "X_317", name: "X 317" }, // 317
    LanguageEntry { code: "", cname: "X_318", name: "X 318" }, // 318
    LanguageEntry { code: "", cname: "X_319", name: "X 319" }, // 319
    LanguageEntry { code: "", cname: "X_320", name: "X 320" }, // 320
    LanguageEntry { code: "", cname: "X_321", name: "X 321" }, // 321
    LanguageEntry { code: "", cname: "X_322", name: "X 322" }, // 322
    LanguageEntry { code: "", cname: "X_323", name: "X 323" }, // 323
    LanguageEntry { code: "", cname: "X_324", name: "X 324" }, // 324
    LanguageEntry { code: "", cname: "X_325", name: "X 325" }, // 325
    LanguageEntry { code: "", cname: "X_326", name: "X 326" }, // 326
    LanguageEntry { code: "", cname: "X_327", name: "X 327" }, // 327
    LanguageEntry { code: "", cname: "X_328", name: "X 328" }, // 328
    LanguageEntry { code: "", cname: "X_329", name: "X 329" }, // 329
    LanguageEntry { code: "", cname: "X_330", name: "X 330" }, // 330
    LanguageEntry { code: "", cname: "X_331", name: "X 331" }, // 331
    LanguageEntry { code: "", cname: "X_332", name: "X 332" }, // 332
    LanguageEntry { code: "", cname: "X_333", name: "X 333" }, // 333
    LanguageEntry { code: "", cname: "X_334", name: "X 334" }, // 334
    LanguageEntry { code: "", cname: "X_335", name: "X 335" }, // 335
    LanguageEntry { code: "", cname: "X_336", name: "X 336" }, // 336
    LanguageEntry { code: "", cname: "X_337", name: "X 337" }, // 337
    LanguageEntry { code: "", cname: "X_338", name: "X 338" }, // 338
    LanguageEntry { code: "", cname: "X_339", name: "X 339" }, // 339
    LanguageEntry { code: "", cname: "X_340", name: "X 340" }, // 340
    LanguageEntry { code: "", cname: "X_341", name: "X 341" }, // 341
    LanguageEntry { code: "", cname: "X_342", name: "X 342" }, // 342
    LanguageEntry { code: "", cname: "X_343", name: "X 343" }, // 343
    LanguageEntry { code: "", cname: "X_344", name: "X 344" }, // 344
    LanguageEntry { code: "", cname: "X_345", name: "X 345" }, // 345
    LanguageEntry { code: "", cname: "X_346", name: "X 346" }, // 346
    LanguageEntry { code: "", cname: "X_347", name: "X 347" }, // 347
    LanguageEntry { code: "", cname: "X_348", name: "X 348" }, // 348
    LanguageEntry { code: "", cname: "X_349", name: "X 349" }, // 349
    LanguageEntry { code: "", cname: "X_350", name: "X 350" }, // 350
    LanguageEntry { code: "", cname: "X_351", name: "X 351" }, // 351
    LanguageEntry { code: "", cname: "X_352", name: "X 352" }, // 352
    LanguageEntry { code: "", cname: "X_353", name: "X 353" }, // 353
    LanguageEntry { code: "", cname: "X_354", name: "X 354" }, // 354
    LanguageEntry { code: "", cname: "X_355", name: "X 355" }, // 355
    LanguageEntry { code: "", cname: "X_356", name: "X 356" }, // 356
    LanguageEntry { code: "", cname: "X_357", name: "X 357" }, // 357
    LanguageEntry { code: "", cname: "X_358", name: "X 358" }, // 358
    LanguageEntry { code: "", cname: "X_359", name: "X 359" }, // 359
    LanguageEntry { code: "", cname: "X_360", name: "X 360" }, // 360
    LanguageEntry { code: "", cname: "X_361", name: "X 361" }, // 361
    LanguageEntry { code: "", cname: "X_362", name: "X 362" }, // 362
    LanguageEntry { code: "", cname: "X_363", name: "X 363" }, // 363
    LanguageEntry { code: "", cname: "X_364", name: "X 364" }, // 364
    LanguageEntry { code: "", cname: "X_365", name: "X 365" }, // 365
    LanguageEntry { code: "", cname: "X_366", name: "X 366" }, // 366
    LanguageEntry { code: "", cname: "X_367", name: "X 367" }, // 367
    LanguageEntry { code: "", cname: "X_368", name: "X 368" }, // 368
    LanguageEntry { code: "", cname: "X_369", name: "X 369" }, // 369
    LanguageEntry { code: "", cname: "X_370", name: "X 370" }, // 370
    LanguageEntry { code: "", cname: "X_371", name: "X 371" }, // 371
    LanguageEntry { code: "", cname: "X_372", name: "X 372" }, // 372
    LanguageEntry { code: "", cname: "X_373", name: "X 373" }, // 373
    LanguageEntry { code: "", cname: "X_374", name: "X 374" }, // 374
    LanguageEntry { code: "", cname: "X_375", name: "X 375" }, // 375
    LanguageEntry { code: "", cname: "X_376", name: "X 376" }, // 376
    LanguageEntry { code: "", cname: "X_377", name: "X 377" }, // 377
    LanguageEntry { code: "", cname: "X_378", name: "X 378" }, // 378
    LanguageEntry { code: "", cname: "X_379", name: "X 379" }, // 379
    LanguageEntry { code: "", cname: "X_380", name: "X 380" }, // 380
    LanguageEntry { code: "", cname: "X_381", name: "X 381" }, // 381
    LanguageEntry { code: "", cname: "X_382", name: "X 382" }, // 382
    LanguageEntry { code: "", cname: "X_383", name: "X 383" }, // 383
    LanguageEntry { code: "", cname: "X_384", name: "X 384" }, // 384
    LanguageEntry { code: "", cname: "X_385", name: "X 385" }, // 385
    LanguageEntry { code: "", cname: "X_386", name: "X 386" }, // 386
    LanguageEntry { code: "", cname: "X_387", name: "X 387" }, // 387
    LanguageEntry { code: "", cname: "X_388", name: "X 388" }, // 388
    LanguageEntry { code: "", cname: "X_389", name: "X 389" }, // 389
    LanguageEntry { code: "", cname: "X_390", name: "X 390" }, // 390
    LanguageEntry { code: "", cname: "X_391", name: "X 391" }, // 391
    LanguageEntry { code: "", cname: "X_392", name: "X 392" }, // 392
    LanguageEntry { code: "", cname: "X_393", name: "X 393" }, // 393
    LanguageEntry { code: "", cname: "X_394", name: "X 394" }, // 394
    LanguageEntry { code: "", cname: "X_395", name: "X 395" }, // 395
    LanguageEntry { code: "", cname: "X_396", name: "X 396" }, // 396
    LanguageEntry { code: "", cname: "X_397", name: "X 397" }, // 397
    LanguageEntry { code: "", cname: "X_398", name: "X 398" }, // 398
    LanguageEntry { code: "", cname: "X_399", name: "X 399" }, // 399
    LanguageEntry { code: "", cname: "X_400", name: "X 400" }, // 400
    LanguageEntry { code: "", cname: "X_401", name: "X 401" }, // 401
    LanguageEntry { code: "", cname: "X_402", name: "X 402" }, // 402
    LanguageEntry { code: "", cname: "X_403", name: "X 403" }, // 403
    LanguageEntry { code: "", cname: "X_404", name: "X 404" }, // 404
    LanguageEntry { code: "", cname: "X_405", name: "X 405" }, // 405
    LanguageEntry { code: "", cname: "X_406", name: "X 406" }, // 406
    LanguageEntry { code: "", cname: "X_407", name: "X 407" }, // 407
    LanguageEntry { code: "", cname: "X_408", name: "X 408" }, // 408
    LanguageEntry { code: "", cname: "X_409", name: "X 409" }, // 409
    LanguageEntry { code: "", cname: "X_410", name: "X 410" }, // 410
    LanguageEntry { code: "", cname: "X_411", name: "X 411" }, // 411
    LanguageEntry { code: "", cname: "X_412", name: "X 412" }, // 412
    LanguageEntry { code: "", cname: "X_413", name: "X 413" }, // 413
    LanguageEntry { code: "", cname: "X_414", name: "X 414" }, // 414
    LanguageEntry { code: "", cname: "X_415", name: "X 415" }, // 415
    LanguageEntry { code: "", cname: "X_416", name: "X 416" }, // 416
    LanguageEntry { code: "", cname: "X_417", name: "X 417" }, // 417
    LanguageEntry { code: "", cname: "X_418", name: "X 418" }, // 418
    LanguageEntry { code: "", cname: "X_419", name: "X 419" }, // 419
    LanguageEntry { code: "", cname: "X_420", name: "X 420" }, // 420
    LanguageEntry { code: "", cname: "X_421", name: "X 421" }, // 421
    LanguageEntry { code: "", cname: "X_422", name: "X 422" }, // 422
    LanguageEntry { code: "", cname: "X_423", name: "X 423" }, // 423
    LanguageEntry { code: "", cname: "X_424", name: "X 424" }, // 424
    LanguageEntry { code: "", cname: "X_425", name: "X 425" }, // 425
    LanguageEntry { code: "", cname: "X_426", name: "X 426" }, // 426
    LanguageEntry { code: "", cname: "X_427", name: "X 427" }, // 427
    LanguageEntry { code: "", cname: "X_428", name: "X 428" }, // 428
    LanguageEntry { code: "", cname: "X_429", name: "X 429" }, // 429
    LanguageEntry { code: "", cname: "X_430", name: "X 430" }, // 430
    LanguageEntry { code: "", cname: "X_431", name: "X 431" }, // 431
    LanguageEntry { code: "", cname: "X_432", name: "X 432" }, // 432
    LanguageEntry { code: "", cname: "X_433", name: "X 433" }, // 433
    LanguageEntry { code: "", cname: "X_434", name: "X 434" }, // 434
    LanguageEntry { code: "", cname: "X_435", name: "X 435" }, // 435
    LanguageEntry { code: "", cname: "X_436", name: "X 436" }, // 436
    LanguageEntry { code: "", cname: "X_437", name: "X 437" }, // 437
    LanguageEntry { code: "", cname: "X_438", name: "X 438" }, // 438
    LanguageEntry { code: "", cname: "X_439", name: "X 439" }, // 439
    LanguageEntry { code: "", cname: "X_440", name: "X 440" }, // 440
    LanguageEntry { code: "", cname: "X_441", name: "X 441" }, // 441
    LanguageEntry { code: "", cname: "X_442", name: "X 442" }, // 442
    LanguageEntry { code: "", cname: "X_443", name: "X 443" }, // 443
    LanguageEntry { code: "", cname: "X_444", name: "X 444" }, // 444
    LanguageEntry { code: "", cname: "X_445", name: "X 445" }, // 445
    LanguageEntry { code: "", cname: "X_446", name: "X 446" }, // 446
    LanguageEntry { code: "", cname: "X_447", name: "X 447" }, // 447
    LanguageEntry { code: "", cname: "X_448", name: "X 448" }, // 448
    LanguageEntry { code: "", cname: "X_449", name: "X 449" }, // 449
    LanguageEntry { code: "", cname: "X_450", name: "X 450" }, // 450
    LanguageEntry { code: "", cname: "X_451", name: "X 451" }, // 451
    LanguageEntry { code: "", cname: "X_452", name: "X 452" }, // 452
    LanguageEntry { code: "", cname: "X_453", name: "X 453" }, // 453
    LanguageEntry { code: "", cname: "X_454", name: "X 454" }, // 454
    LanguageEntry { code: "", cname: "X_455", name: "X 455" }, // 455
    LanguageEntry { code: "", cname: "X_456", name: "X 456" }, // 456
    LanguageEntry { code: "", cname: "X_457", name: "X 457" }, // 457
    LanguageEntry { code: "", cname: "X_458", name: "X 458" }, // 458
    LanguageEntry { code: "", cname: "X_459", name: "X 459" }, // 459
    LanguageEntry { code: "", cname: "X_460", name: "X 460" }, // 460
    LanguageEntry { code: "", cname: "X_461", name: "X 461" }, // 461
    LanguageEntry { code: "", cname: "X_462", name: "X 462" }, // 462
    LanguageEntry { code: "", cname: "X_463", name: "X 463" }, // 463
    LanguageEntry { code: "", cname: "X_464", name: "X 464" }, // 464
    LanguageEntry { code: "", cname: "X_465", name: "X 465" }, // 465
    LanguageEntry { code: "", cname: "X_466", name: "X 466" }, // 466
    LanguageEntry { code: "", cname: "X_467", name: "X 467" }, // 467
    LanguageEntry { code: "", cname: "X_468", name: "X 468" }, // 468
    LanguageEntry { code: "", cname: "X_469", name: "X 469" }, // 469
    LanguageEntry { code: "", cname: "X_470", name: "X 470" }, // 470
    LanguageEntry { code: "", cname: "X_471", name: "X 471" }, // 471
    LanguageEntry { code: "", cname: "X_472", name: "X 472" }, // 472
    LanguageEntry { code: "", cname: "X_473", name: "X 473" }, // 473
    LanguageEntry { code: "", cname: "X_474", name: "X 474" }, // 474
    LanguageEntry { code: "", cname: "X_475", name: "X 475" }, // 475
    LanguageEntry { code: "", cname: "X_476", name: "X 476" }, // 476
    LanguageEntry { code: "", cname: "X_477", name: "X 477" }, // 477
    LanguageEntry { code: "", cname: "X_478", name: "X 478" }, // 478
    LanguageEntry { code: "", cname: "X_479", name: "X 479" }, // 479
    LanguageEntry { code: "", cname: "X_480", name: "X 480" }, // 480
    LanguageEntry { code: "", cname: "X_481", name: "X 481" }, // 481
    LanguageEntry { code: "", cname: "X_482", name: "X 482" }, // 482
    LanguageEntry { code: "", cname: "X_483", name: "X 483" }, // 483
    LanguageEntry { code: "", cname: "X_484", name: "X 484" }, // 484
    LanguageEntry { code: "", cname: "X_485", name: "X 485" }, // 485
    LanguageEntry { code: "", cname: "X_486", name: "X 486" }, // 486
    LanguageEntry { code: "", cname: "X_487", name: "X 487" }, // 487
    LanguageEntry { code: "", cname: "X_488", name: "X 488" }, // 488
    LanguageEntry { code: "", cname: "X_489", name: "X 489" }, // 489
    LanguageEntry { code: "", cname: "X_490", name: "X 490" }, // 490
    LanguageEntry { code: "", cname: "X_491", name: "X 491" }, // 491
    LanguageEntry { code: "", cname: "X_492", name: "X 492" }, // 492
    LanguageEntry { code: "", cname: "X_493", name: "X 493" }, // 493
    LanguageEntry { code: "", cname: "X_494", name: "X 494" }, // 494
    LanguageEntry { code: "", cname: "X_495", name: "X 495" }, // 495
    LanguageEntry { code: "", cname: "X_496", name: "X 496" }, // 496
    LanguageEntry { code: "", cname: "X_497", name: "X 497" }, // 497
    LanguageEntry { code: "", cname: "X_498", name: "X 498" }, // 498
    LanguageEntry { code: "", cname: "X_499", name: "X 499" }, // 499
    LanguageEntry { code: "", cname: "X_500", name: "X 500" }, // 500
    LanguageEntry { code: "", cname: "X_501", name: "X 501" }, // 501
    LanguageEntry { code: "", cname: "X_502", name: "X 502" }, // 502
    LanguageEntry { code: "", cname: "X_503", name: "X 503" }, // 503
    LanguageEntry { code: "", cname: "X_504", name: "X 504" }, // 504
    LanguageEntry { code: "", cname: "X_505", name: "X 505" }, // 505
    LanguageEntry { code: "nr", cname: "NDEBELE", name: "Ndebele" }, // 506
    LanguageEntry { code: "zzb", cname: "X_BORK_BORK_BORK", name: "X bork bork bork" }, // 507
    LanguageEntry { code: "zzp", cname: "X_PIG_LATIN", name: "X pig latin" }, // 508
    LanguageEntry { code: "zzh", cname: "X_HACKER", name: "X hacker" }, // 509
    LanguageEntry { code: "tlh", cname: "X_KLINGON", name: "X klingon" }, // 510
    LanguageEntry { code: "zze", cname: "X_ELMER_FUDD", name: "X elmer fudd" }, // 511
    LanguageEntry { code: "xx-Zyyy", cname: "X_Common", name: "X common" }, // 512
    LanguageEntry { code: "xx-Latn", cname: "X_Latin", name: "X latin" }, // 513
    LanguageEntry { code: "xx-Grek", cname: "X_Greek", name: "X greek" }, // 514
    LanguageEntry { code: "xx-Cyrl", cname: "X_Cyrillic", name: "X cyrillic" }, // 515
    LanguageEntry { code: "xx-Armn", cname: "X_Armenian", name: "X armenian" }, // 516
    LanguageEntry { code: "xx-Hebr", cname: "X_Hebrew", name: "X hebrew" }, // 517
    LanguageEntry { code: "xx-Arab", cname: "X_Arabic", name: "X arabic" }, // 518
    LanguageEntry { code: "xx-Syrc", cname: "X_Syriac", name: "X syriac" }, // 519
    LanguageEntry { code: "xx-Thaa", cname: "X_Thaana", name: "X thaana" }, // 520
    LanguageEntry { code: "xx-Deva", cname: "X_Devanagari", name: "X devanagari" }, // 521
    LanguageEntry { code: "xx-Beng", cname: "X_Bengali", name: "X bengali" }, // 522
    LanguageEntry { code: "xx-Guru", cname: "X_Gurmukhi", name: "X gurmukhi" }, // 523
    LanguageEntry { code: "xx-Gujr", cname: "X_Gujarati", name: "X gujarati" }, // 524
    LanguageEntry { code: "xx-Orya", cname: "X_Oriya", name: "X oriya" }, // 525
    LanguageEntry { code: "xx-Taml", cname: "X_Tamil", name: "X tamil" }, // 526
    LanguageEntry { code: "xx-Telu", cname: "X_Telugu", name: "X telugu" }, // 527
    LanguageEntry { code: "xx-Knda", cname: "X_Kannada", name: "X kannada" }, // 528
    LanguageEntry { code: "xx-Mlym", cname: "X_Malayalam", name: "X malayalam" }, // 529
    LanguageEntry { code: "xx-Sinh", cname: "X_Sinhala", name: "X sinhala" }, // 530
    LanguageEntry { code: "xx-Thai", cname: "X_Thai", name: "X thai" }, // 531
    LanguageEntry { code: "xx-Laoo", cname: "X_Lao", name: "X lao" }, // 532
    LanguageEntry { code: "xx-Tibt", cname: "X_Tibetan", name: "X tibetan" }, // 533
    LanguageEntry { code: "xx-Mymr", cname: "X_Myanmar", name: "X myanmar" }, // 534
    LanguageEntry { code: "xx-Geor", cname: "X_Georgian", name: "X georgian" }, // 535
    LanguageEntry { code: "xx-Hang", cname: "X_Hangul", name: "X hangul" }, // 536
    LanguageEntry { code: "xx-Ethi", cname: "X_Ethiopic", name: "X ethiopic" }, // 537
    LanguageEntry { code: "xx-Cher", cname: "X_Cherokee", name: "X cherokee" }, // 538
    LanguageEntry { code: "xx-Cans", cname: "X_Canadian_Aboriginal", name: "X canadian aboriginal" }, // 539
    LanguageEntry { code: "xx-Ogam", cname: "X_Ogham", name: "X ogham" }, // 540
    LanguageEntry { code: "xx-Runr", cname: "X_Runic", name: "X runic" }, // 541
    LanguageEntry { code: "xx-Khmr", cname: "X_Khmer", name: "X khmer" }, // 542
    LanguageEntry { code: "xx-Mong", cname: "X_Mongolian", name: "X mongolian" }, // 543
    LanguageEntry { code: "xx-Hira", cname: "X_Hiragana", name: "X hiragana" }, // 544
    LanguageEntry { code: "xx-Kana", cname: "X_Katakana", name: "X katakana" }, // 545
    LanguageEntry { code: "xx-Bopo", cname: "X_Bopomofo", name: "X bopomofo" }, // 546
    LanguageEntry { code: "xx-Hani", cname: "X_Han", name: "X han" }, // 547
    LanguageEntry { code: "xx-Yiii", cname: "X_Yi", name: "X yi" }, // 548
    LanguageEntry { code: "xx-Ital", cname: "X_Old_Italic", name: "X old italic" }, // 549
    LanguageEntry { code: "xx-Goth", cname: "X_Gothic", name: "X gothic" }, // 550
    LanguageEntry { code: "xx-Dsrt", cname: "X_Deseret", name: "X deseret" }, // 551
    LanguageEntry { code: "xx-Qaai", cname: "X_Inherited", name: "X inherited" }, // 552
    LanguageEntry { code: "xx-Tglg", cname: "X_Tagalog", name: "X tagalog" }, // 553
    LanguageEntry { code: "xx-Hano", cname: "X_Hanunoo", name: "X hanunoo" }, // 554
    LanguageEntry { code: "xx-Buhd", cname: "X_Buhid", name: "X buhid" }, // 555
    LanguageEntry { code: "xx-Tagb", cname: "X_Tagbanwa", name: "X tagbanwa" }, // 556
    LanguageEntry { code: "xx-Limb", cname: "X_Limbu", name: "X limbu" }, // 557
    LanguageEntry { code: "xx-Tale", cname: "X_Tai_Le", name: "X tai le" }, // 558
    LanguageEntry { code: "xx-Linb", cname: "X_Linear_B", name: "X linear b" }, // 559
    LanguageEntry { code: "xx-Ugar", cname: "X_Ugaritic", name: "X ugaritic" }, // 560
    LanguageEntry { code: "xx-Shaw", cname: "X_Shavian", name: "X shavian" }, // 561
    LanguageEntry { code: "xx-Osma", cname: "X_Osmanya", name: "X osmanya" }, // 562
    LanguageEntry { code: "xx-Cprt", cname: "X_Cypriot", name: "X cypriot" }, // 563
    LanguageEntry { code: "xx-Brai", cname: "X_Braille", name: "X braille" }, // 564
    LanguageEntry { code: "xx-Bugi", cname: "X_Buginese", name: "X buginese" }, // 565
    LanguageEntry { code: "xx-Copt", cname: "X_Coptic", name: "X coptic" }, // 566
    LanguageEntry { code: "xx-Talu", cname: "X_New_Tai_Lue", name: "X new tai lue" }, // 567
    LanguageEntry { code: "xx-Glag", cname: "X_Glagolitic", name: "X glagolitic" }, // 568
    LanguageEntry { code: "xx-Tfng", cname: "X_Tifinagh", name: "X tifinagh" }, // 569
    LanguageEntry { code: "xx-Sylo", cname: "X_Syloti_Nagri", name: "X syloti nagri" }, // 570
    LanguageEntry { code: "xx-Xpeo", cname: "X_Old_Persian", name: "X old persian" }, // 571
    LanguageEntry { code: "xx-Khar", cname: "X_Kharoshthi", name: "X kharoshthi" }, // 572
    LanguageEntry { code: "xx-Bali", cname: "X_Balinese", name: "X balinese" }, // 573
    LanguageEntry { code: "xx-Xsux", cname: "X_Cuneiform", name: "X cuneiform" }, // 574
    LanguageEntry { code: "xx-Phnx", cname: "X_Phoenician", name: "X phoenician" }, // 575
    LanguageEntry { code: "xx-Phag", cname: "X_Phags_Pa", name: "X phags pa" }, // 576
    LanguageEntry { code: "xx-Nkoo", cname: "X_Nko", name: "X nko" }, // 577
    LanguageEntry { code: "xx-Sund", cname: "X_Sundanese", name: "X sundanese" }, // 578
    LanguageEntry { code: "xx-Lepc", cname: "X_Lepcha", name: "X lepcha" }, // 579
    LanguageEntry { code: "xx-Olck", cname: "X_Ol_Chiki", name: "X ol chiki" }, // 580
    LanguageEntry { code: "xx-Vaii", cname: "X_Vai", name: "X vai" }, // 581
    LanguageEntry { code: "xx-Saur", cname: "X_Saurashtra", name: "X saurashtra" }, // 582
    LanguageEntry { code: "xx-Kali", cname: "X_Kayah_Li", name: "X kayah li" }, // 583
    LanguageEntry { code: "xx-Rjng", cname: "X_Rejang", name: "X rejang" }, // 584
    LanguageEntry { code: "xx-Lyci", cname: "X_Lycian", name: "X lycian" }, // 585
    LanguageEntry { code: "xx-Cari", cname: "X_Carian", name: "X carian" }, // 586
    LanguageEntry { code: "xx-Lydi", cname: "X_Lydian", name: "X lydian" }, // 587
    LanguageEntry { code: "xx-Cham", cname: "X_Cham", name: "X cham" }, // 588
    LanguageEntry { code: "xx-Lana", cname: "X_Tai_Tham", name: "X tai tham" }, // 589
    LanguageEntry { code: "xx-Tavt", cname: "X_Tai_Viet", name: "X tai viet" }, // 590
    LanguageEntry { code: "xx-Avst", cname: "X_Avestan", name: "X avestan" }, // 591
    LanguageEntry { code: "xx-Egyp", cname: "X_Egyptian_Hieroglyphs", name: "X egyptian hieroglyphs" }, // 592
    LanguageEntry { code: "xx-Samr", cname: "X_Samaritan", name: "X samaritan" }, // 593
    LanguageEntry { code: "xx-Lisu", cname: "X_Lisu", name: "X lisu" }, // 594
    LanguageEntry { code: "xx-Bamu", cname: "X_Bamum", name: "X bamum" }, // 595
    LanguageEntry { code: "xx-Java", cname: "X_Javanese", name: "X javanese" }, // 596
    LanguageEntry { code: "xx-Mtei", cname: "X_Meetei_Mayek", name: "X meetei mayek" }, // 597
    LanguageEntry { code: "xx-Armi", cname: "X_Imperial_Aramaic", name: "X imperial aramaic" }, // 598
    LanguageEntry { code: "xx-Sarb", cname: "X_Old_South_Arabian", name: "X old south arabian" }, // 599
    LanguageEntry { code: "xx-Prti", cname: "X_Inscriptional_Parthian", name: "X inscriptional parthian" }, // 600
    LanguageEntry { code: "xx-Phli", cname: "X_Inscriptional_Pahlavi", name: "X inscriptional pahlavi" }, // 601
    LanguageEntry { code: "xx-Orkh", cname: "X_Old_Turkic", name: "X old turkic" }, // 602
    LanguageEntry { code: "xx-Kthi", cname: "X_Kaithi", name: "X kaithi" }, // 603
    LanguageEntry { code: "xx-Batk", cname: "X_Batak", name: "X batak" }, // 604
    LanguageEntry { code: "xx-Brah", cname: "X_Brahmi", name: "X brahmi" }, // 605
    LanguageEntry { code: "xx-Mand", cname: "X_Mandaic", name: "X mandaic" }, // 606
    LanguageEntry { code: "xx-Cakm", cname: "X_Chakma", name: "X chakma" }, // 607
    LanguageEntry { code: "xx-Merc", cname: "X_Meroitic_Cursive", name: "X meroitic cursive" }, // 608
    LanguageEntry { code: "xx-Mero", cname: "X_Meroitic_Hieroglyphs", name: "X meroitic hieroglyphs" }, // 609
    LanguageEntry { code: "xx-Plrd", cname: "X_Miao", name: "X miao" }, // 610
    LanguageEntry { code: "xx-Shrd", cname: "X_Sharada", name: "X sharada" }, // 611
    LanguageEntry { code: "xx-Sora", cname: "X_Sora_Sompeng", name: "X sora sompeng" }, // 612
    LanguageEntry { code: "xx-Takr", cname: "X_Takri", name: "X takri" }, // 613
];
