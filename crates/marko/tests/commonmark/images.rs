use crate::commonmark::harness::spec_test;

spec_test!(
    inline_image,
    "![foo](/url \"title\")\n",
    "<p><img src=\"/url\" alt=\"foo\" title=\"title\" /></p>\n"
);
spec_test!(
    alt_text_flattens_markup,
    "![foo *bar*](/url)\n",
    "<p><img src=\"/url\" alt=\"foo bar\" /></p>\n"
);
spec_test!(
    nested_links_reduce_to_text,
    "![foo [bar](/url2)](/url)\n",
    "<p><img src=\"/url\" alt=\"foo bar\" /></p>\n"
);
spec_test!(
    reference_image,
    "[bar]: /url\n![foo][bar]\n",
    "<p><img src=\"/url\" alt=\"foo\" /></p>\n"
);
spec_test!(
    shortcut_image,
    "[foo]: /url \"title\"\n![foo]\n",
    "<p><img src=\"/url\" alt=\"foo\" title=\"title\" /></p>\n"
);
spec_test!(
    escaped_bang_makes_a_link,
    "[foo]: /url \"title\"\n\\![foo]\n",
    "<p>!<a href=\"/url\" title=\"title\">foo</a></p>\n"
);
spec_test!(empty_alt, "![](/url)\n", "<p><img src=\"/url\" alt=\"\" /></p>\n");
