use crate::commonmark::harness::spec_test;

spec_test!(
    named_references,
    "&nbsp; &amp; &copy; &AElig; &Dcaron; &frac34;\n",
    "<p>\u{A0} &amp; \u{A9} \u{C6} \u{10E} \u{BE}</p>\n"
);
spec_test!(
    obscure_named_references,
    "&HilbertSpace; &DifferentialD; &ClockwiseContourIntegral; &ngE;\n",
    "<p>\u{210B} \u{2146} \u{2232} \u{2267}\u{338}</p>\n"
);
spec_test!(decimal_references, "&#35; &#1234;\n", "<p># \u{4D2}</p>\n");
spec_test!(hex_references, "&#X22; &#x4D2;\n", "<p>&quot; \u{4D2}</p>\n");
spec_test!(
    invalid_code_points_are_replaced,
    "&#0; &#9876543;\n",
    "<p>\u{FFFD} \u{FFFD}</p>\n"
);
spec_test!(
    too_many_digits_is_literal,
    "&#98765432;\n",
    "<p>&amp;#98765432;</p>\n"
);
spec_test!(
    unknown_names_stay_literal,
    "&MadeUpEntity;\n",
    "<p>&amp;MadeUpEntity;</p>\n"
);
spec_test!(
    missing_semicolon_is_literal,
    "&copy\n",
    "<p>&amp;copy</p>\n"
);
spec_test!(decoded_newline_in_text, "foo&#10;bar\n", "<p>foo\nbar</p>\n");
spec_test!(
    no_decoding_in_code_spans,
    "`f&ouml;&ouml;`\n",
    "<p><code>f&amp;ouml;&amp;ouml;</code></p>\n"
);
spec_test!(
    no_decoding_in_code_blocks,
    "    f&ouml;f&ouml;\n",
    "<pre><code>f&amp;ouml;f&amp;ouml;\n</code></pre>\n"
);
spec_test!(
    entities_work_in_link_destinations,
    "[a](/f&ouml;&ouml; \"f&ouml;&ouml;\")\n",
    "<p><a href=\"/f%C3%B6%C3%B6\" title=\"f\u{F6}\u{F6}\">a</a></p>\n"
);
